//! One pipeline mode per subcommand.

use crate::args::SubCommand;
use anyhow::{Context, Result};
use atlas_assets::{OutputTree, PaletteExport, PlacementReport};
use atlas_core::{AliasMap, AssetSize, AtlasConfig, CldrNames, NameResolver, ZwjTable};
use std::path::Path;

/// A pipeline step with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clean,
    BuildCldr,
    BuildAliases,
    Info,
    Place(AssetSize),
    Inoffensive { mono: bool },
    Html,
    Flags,
    Palettes,
}

impl From<&SubCommand> for Mode {
    fn from(cmd: &SubCommand) -> Self {
        match cmd {
            SubCommand::Clean => Mode::Clean,
            SubCommand::BuildCldr => Mode::BuildCldr,
            SubCommand::BuildAliases => Mode::BuildAliases,
            SubCommand::Info => Mode::Info,
            SubCommand::Place { size } => Mode::Place(*size),
            SubCommand::Inoffensive { mono } => Mode::Inoffensive { mono: *mono },
            SubCommand::Html => Mode::Html,
            SubCommand::Flags => Mode::Flags,
            SubCommand::Palettes => Mode::Palettes,
        }
    }
}

fn zwj_table(cfg: &AtlasConfig) -> Result<ZwjTable> {
    match &cfg.zwj_table {
        Some(path) => ZwjTable::load(path)
            .with_context(|| format!("loading ZWJ names from {}", path.display())),
        None => ZwjTable::builtin().context("parsing built-in ZWJ names"),
    }
}

fn cleaned_records(cfg: &AtlasConfig) -> Result<Vec<atlas_core::EmojiRecord>> {
    let path = cfg.data_path(&cfg.files.cleaned_json);
    atlas_metadata::read_records(&path)
        .with_context(|| format!("reading cleaned records from {}", path.display()))
}

fn finish(report: &PlacementReport, what: &str, tree: &Path) {
    report.log_summary(what);
    tracing::info!("{what} written under {}", tree.display());
}

/// Run `mode` against `cfg`.
pub fn run(mode: Mode, cfg: &AtlasConfig) -> Result<()> {
    tracing::info!("mode {mode:?} ({})", cfg.kind);
    let files = &cfg.files;
    match mode {
        Mode::Clean => {
            let input = cfg.data_path(&files.upstream_json);
            atlas_metadata::clean_file(&input, &cfg.data_path(&files.cleaned_json))
                .with_context(|| format!("cleaning {}", input.display()))?;
        }
        Mode::BuildCldr => {
            let input = cfg.data_path(&files.cldr_raw_json);
            atlas_metadata::build_cldr(&input, &cfg.data_path(&files.cldr_json))
                .with_context(|| format!("building CLDR names from {}", input.display()))?;
        }
        Mode::BuildAliases => {
            let input = cfg.data_path(&files.shortcodes_raw_json);
            atlas_metadata::build_aliases(&input, &cfg.data_path(&files.aliases_json))
                .with_context(|| format!("building aliases from {}", input.display()))?;
        }
        Mode::Info => {
            let input = cfg.data_path(&files.cleaned_json);
            atlas_metadata::write_info(&input, &cfg.data_path(&files.info_json))
                .with_context(|| format!("writing info snapshot from {}", input.display()))?;
        }
        Mode::Place(AssetSize::Large) => {
            let cldr_path = cfg.data_path(&files.cldr_json);
            let cldr = CldrNames::load(&cldr_path)
                .with_context(|| format!("loading CLDR names from {}", cldr_path.display()))?;
            let aliases_path = cfg.data_path(&files.aliases_json);
            let aliases = AliasMap::load(&aliases_path)
                .with_context(|| format!("loading aliases from {}", aliases_path.display()))?;
            let resolver = NameResolver::new(zwj_table(cfg)?, cldr);

            let tree = OutputTree::new(cfg.renamed_dir(AssetSize::Large));
            let raw = cfg.raw_dir(AssetSize::Large);
            let report = atlas_assets::place_from_directory(&raw, &tree, &resolver, &aliases)
                .with_context(|| format!("placing images from {}", raw.display()))?;
            finish(&report, "large placement", tree.root());
        }
        Mode::Place(size) => {
            let records = cleaned_records(cfg)?;
            let tree = OutputTree::new(cfg.renamed_dir(size));
            let raw = cfg.raw_dir(size);
            let report = atlas_assets::place_from_records(&records, &raw, &tree)
                .with_context(|| format!("placing images from {}", raw.display()))?;
            finish(&report, &format!("{}px placement", size.pixels()), tree.root());
        }
        Mode::Inoffensive { mono } => {
            let records = cleaned_records(cfg)?;
            let tree = OutputTree::new(cfg.inoffensive_dir(mono));
            let raw = cfg.raw_dir(AssetSize::Large);
            let outcome = atlas_assets::place_inoffensive(records, &raw, &tree)
                .with_context(|| format!("placing curated images from {}", raw.display()))?;
            let snapshot = cfg.inoffensive_info_json(mono);
            atlas_metadata::write_records(&snapshot, &outcome.kept)
                .with_context(|| format!("writing {}", snapshot.display()))?;
            finish(&outcome.report, "inoffensive placement", tree.root());
        }
        Mode::Html => {
            let info = cfg.data_path(&files.info_json);
            atlas_metadata::write_html(&info, &cfg.html_file(), cfg.kind)
                .with_context(|| format!("rendering preview of {}", info.display()))?;
        }
        Mode::Flags => {
            let records = cleaned_records(cfg)?;
            let tree = OutputTree::new(cfg.asset_path(&cfg.flags_output_dir));
            let source = cfg.asset_path(&cfg.flags_source_dir);
            let report = atlas_assets::place_flags(&records, &source, &tree)
                .with_context(|| format!("placing flags from {}", source.display()))?;
            finish(&report, "flag placement", tree.root());
        }
        Mode::Palettes => {
            let job = PaletteExport {
                palette_dir: cfg.asset_path(&cfg.palette_dir),
                asset_root: cfg.asset_root.clone(),
                kind: cfg.kind,
            };
            let count = atlas_assets::export_palettes(&job)
                .with_context(|| format!("exporting palettes from {}", job.palette_dir.display()))?;
            tracing::info!("exported {count} palettes");
        }
    }
    Ok(())
}
