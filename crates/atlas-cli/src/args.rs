//! Command line arguments.

use atlas_core::{AssetSize, AtlasConfig, ColorKind};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "emoji-atlas", about = "build-time asset pipeline for the Noto emoji atlas")]
pub struct Opt {
    /// JSON configuration file; missing keys keep their defaults.
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// image set to process: `color` or `black`.
    #[structopt(short, long)]
    pub kind: Option<ColorKind>,

    /// directory holding the JSON tables and the HTML page.
    #[structopt(long, parse(from_os_str))]
    pub data_dir: Option<PathBuf>,

    /// directory holding the raw image sets and the output trees.
    #[structopt(long, parse(from_os_str))]
    pub asset_root: Option<PathBuf>,

    /// log every copied file.
    #[structopt(short, long)]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// derive display names from the upstream emoji list and strip unused fields.
    Clean,
    /// rewrite the raw CLDR name table to codename keys.
    BuildCldr,
    /// rewrite the raw shortcode table to codename keys.
    BuildAliases,
    /// write the deduplicated info snapshot.
    Info,
    /// copy raw images into the lookup trees for one size.
    Place {
        /// `large` (72x72), `mid` (32x32) or `small` (24x24).
        #[structopt(short, long, default_value = "large")]
        size: AssetSize,
    },
    /// copy the curated subset and write its snapshot.
    Inoffensive {
        /// write to the monochrome tree and snapshot.
        #[structopt(long)]
        mono: bool,
    },
    /// write the HTML preview page.
    Html,
    /// copy country flags, also keyed by ISO country code.
    Flags,
    /// re-map the finished atlas pages onto every alternate palette.
    Palettes,
}

impl Opt {
    /// Start from the config file (or defaults) and apply flag overrides.
    pub fn config(&self) -> atlas_core::Result<AtlasConfig> {
        let mut cfg = match &self.config {
            Some(path) => AtlasConfig::load(path)?,
            None => AtlasConfig::default(),
        };
        if let Some(kind) = self.kind {
            cfg.kind = kind;
        }
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        if let Some(dir) = &self.asset_root {
            cfg.asset_root = dir.clone();
        }
        Ok(cfg)
    }
}
