//! The curated "inoffensive" variant.

use crate::copy::copy_asset;
use crate::layout::OutputTree;
use crate::report::PlacementReport;
use atlas_core::curation::is_excluded;
use atlas_core::error::Result;
use atlas_core::{hexcode_to_codename, noto_stem, EmojiRecord};
use atlas_metadata::UsedNames;
use std::path::Path;

/// Placement counters plus the records that survived curation and dedup.
#[derive(Debug, Clone, Default)]
pub struct CuratedOutcome {
    pub report: PlacementReport,
    pub kept: Vec<EmojiRecord>,
}

/// Place the curated subset of `records` from `raw_dir` (looked up by
/// `hexcode`, selectors dropped). Excluded and duplicate records are left out of
/// [`CuratedOutcome::kept`]; records whose art is missing stay in it.
pub fn place_inoffensive(
    records: Vec<EmojiRecord>,
    raw_dir: &Path,
    tree: &OutputTree,
) -> Result<CuratedOutcome> {
    let mut outcome = CuratedOutcome::default();
    let mut used = UsedNames::with_capacity(records.len());
    for record in records {
        let name = record.name()?;
        if is_excluded(name) {
            outcome.report.excluded += 1;
            continue;
        }
        if !used.first_use(name) {
            outcome.report.duplicates += 1;
            continue;
        }
        let codename = noto_stem(&hexcode_to_codename(record.hexcode()?));
        let original = raw_dir.join(format!("{codename}.png"));
        if original.is_file() {
            if let Some(emoji) = record.emoji() {
                copy_asset(&original, &tree.emoji_path(emoji))?;
            }
            copy_asset(&original, &tree.name_path(name))?;
            outcome.report.copied += 1;
        } else {
            outcome.report.missing_sources += 1;
        }
        outcome.kept.push(record);
    }
    Ok(outcome)
}
