use crate::error::{AtlasError, Result};
use crate::types::{AssetSize, ColorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths and file names for one pipeline run.
///
/// The defaults match the layout the atlas project has always used: JSON
/// inputs next to the working directory, image trees two levels up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub data_dir: PathBuf,
    pub asset_root: PathBuf,
    pub kind: ColorKind,
    pub files: DataFiles,
    pub flags_source_dir: String,
    pub flags_output_dir: String,
    pub palette_dir: String,
    /// Replaces the built-in ZWJ name table when set.
    pub zwj_table: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub upstream_json: String,
    pub cleaned_json: String,
    pub info_json: String,
    pub cldr_raw_json: String,
    pub cldr_json: String,
    pub shortcodes_raw_json: String,
    pub aliases_json: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            upstream_json: "emoji_15_1.json".into(),
            cleaned_json: "noto-emoji-cleaned.json".into(),
            info_json: "noto-emoji-info.json".into(),
            cldr_raw_json: "names-cldr-raw.json".into(),
            cldr_json: "names-cldr.json".into(),
            shortcodes_raw_json: "shortcodes-discord-raw.json".into(),
            aliases_json: "aliases.json".into(),
        }
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            asset_root: PathBuf::from("../.."),
            kind: ColorKind::Color,
            files: DataFiles::default(),
            flags_source_dir: "scaled-tiny".into(),
            flags_output_dir: "flags-tiny".into(),
            palette_dir: "alt-palette".into(),
            zwj_table: None,
        }
    }
}

impl AtlasConfig {
    /// Load a JSON config file; missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AtlasError::file(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve a file name against `data_dir`.
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Resolve a directory name against `asset_root`.
    pub fn asset_path(&self, dir: &str) -> PathBuf {
        self.asset_root.join(dir)
    }

    /// Raw rasterized source images, e.g. `noto-emoji-32x32-color`.
    pub fn raw_dir(&self, size: AssetSize) -> PathBuf {
        let px = size.pixels();
        self.asset_path(&format!("noto-emoji-{px}x{px}-{}", self.kind))
    }

    /// Output tree of a size placement, e.g. `renamed-mid-color`.
    pub fn renamed_dir(&self, size: AssetSize) -> PathBuf {
        self.asset_path(&format!("renamed-{}{}", size.tree_infix(), self.kind))
    }

    /// Output tree of the curated variant.
    pub fn inoffensive_dir(&self, mono: bool) -> PathBuf {
        let prefix = if mono { "inoffensive-mono-" } else { "inoffensive-" };
        self.asset_path(&format!("{prefix}{}", self.kind))
    }

    /// Snapshot written by the curated variant.
    pub fn inoffensive_info_json(&self, mono: bool) -> PathBuf {
        let suffix = if mono { "inoffensive-mono" } else { "inoffensive" };
        self.data_path(&format!("noto-emoji-info-{suffix}.json"))
    }

    /// Preview page name; the black-line set gets its own page.
    pub fn html_file(&self) -> PathBuf {
        match self.kind {
            ColorKind::Color => self.data_path("index.html"),
            ColorKind::Black => self.data_path("black.html"),
        }
    }
}
