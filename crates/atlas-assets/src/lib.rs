//! Asset placement: copies raw Noto images into the lookup trees the atlas
//! packer consumes (by emoji, by name, by alias, by country code), plus the
//! alternate-palette export of finished atlas pages.

pub mod copy;
pub mod flags;
pub mod inoffensive;
pub mod layout;
pub mod palette;
pub mod placement;
pub mod report;

pub use copy::copy_asset;
pub use flags::place_flags;
pub use inoffensive::{place_inoffensive, CuratedOutcome};
pub use layout::OutputTree;
pub use palette::{export_palettes, Palette, PaletteExport};
pub use placement::{list_pngs, place_from_directory, place_from_records};
pub use report::PlacementReport;
