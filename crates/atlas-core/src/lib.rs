//! Core transforms and lookup tables for the Noto emoji atlas pipeline.
//!
//! Everything here is pure or read-only: name normalization, the codename
//! codec, the ZWJ/CLDR/alias name sources and the curation filter. The
//! side-effecting drivers live in `atlas-metadata` and `atlas-assets`.

pub mod codepoint;
pub mod config;
pub mod curation;
pub mod error;
pub mod names;
pub mod normalize;
pub mod types;
pub mod zwj;

pub use codepoint::{codename_to_emoji, emoji_to_codename, hexcode_to_codename, noto_stem};
pub use config::AtlasConfig;
pub use error::{AtlasError, Result};
pub use names::{AliasMap, CldrNames, NameResolver, NameSource};
pub use normalize::{normalize_name, remove_accents};
pub use types::{AssetSize, ColorKind, EmojiRecord};
pub use zwj::ZwjTable;
