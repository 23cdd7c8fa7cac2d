//! Size placements (72x72 from the raw listing, 32x32 and 24x24 from metadata).

use crate::copy::copy_asset;
use crate::layout::OutputTree;
use crate::report::PlacementReport;
use atlas_core::error::{AtlasError, Result};
use atlas_core::{codename_to_emoji, emoji_to_codename, noto_stem, AliasMap, EmojiRecord, NameResolver};
use atlas_metadata::UsedNames;
use std::path::{Path, PathBuf};

/// Every `*.png` directly inside `dir`, sorted by file name.
pub fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| AtlasError::file(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AtlasError::file(dir, e))?.path();
        let is_png = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AtlasError::InvalidCodename {
            codename: path.display().to_string(),
            reason: "file name is not valid UTF-8".into(),
        })
}

/// Place every raw image in `raw_dir`, naming each one from its codename.
///
/// Each image goes to the emoji tree, to the name tree when `resolver`
/// knows it and to the alias subtree once per alias. An image nobody can
/// name is logged and listed in [`PlacementReport::unresolved`].
pub fn place_from_directory(
    raw_dir: &Path,
    tree: &OutputTree,
    resolver: &NameResolver,
    aliases: &AliasMap,
) -> Result<PlacementReport> {
    let mut report = PlacementReport::default();
    for original in list_pngs(raw_dir)? {
        let codename = file_stem(&original)?;
        let emoji = codename_to_emoji(codename)?;
        copy_asset(&original, &tree.emoji_path(&emoji))?;
        report.copied += 1;

        match resolver.resolve(&emoji, codename) {
            Some((name, _)) => {
                copy_asset(&original, &tree.name_path(name))?;
            }
            None => {
                tracing::warn!(
                    "no name found for emoji '{emoji}' with codename {codename} (re-encodes to {})",
                    emoji_to_codename(&emoji)
                );
                report.unresolved.push(codename.to_string());
            }
        }

        for alias in aliases.get(codename) {
            copy_asset(&original, &tree.alias_path(alias))?;
            report.alias_copies += 1;
        }
    }
    Ok(report)
}

/// Place one image per distinct record name, looking sources up in `raw_dir`
/// by the codename of the record's `emoji`, without selectors.
pub fn place_from_records(
    records: &[EmojiRecord],
    raw_dir: &Path,
    tree: &OutputTree,
) -> Result<PlacementReport> {
    let mut report = PlacementReport::default();
    let mut used = UsedNames::with_capacity(records.len());
    for record in records {
        let name = record.name()?;
        if !used.first_use(name) {
            report.duplicates += 1;
            continue;
        }
        let emoji = record.require_str("emoji")?;
        let original = raw_dir.join(format!("{}.png", noto_stem(&emoji_to_codename(emoji))));
        if !copy_asset(&original, &tree.emoji_path(emoji))? {
            report.missing_sources += 1;
            continue;
        }
        copy_asset(&original, &tree.name_path(name))?;
        for alias in record.aliases() {
            copy_asset(&original, &tree.alias_path(alias))?;
            report.alias_copies += 1;
        }
        report.copied += 1;
    }
    Ok(report)
}
