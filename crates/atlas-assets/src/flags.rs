//! Country flags, additionally filed by ISO 3166-1 code.

use crate::copy::copy_asset;
use crate::layout::OutputTree;
use crate::report::PlacementReport;
use atlas_core::codepoint::country_code;
use atlas_core::error::Result;
use atlas_core::{hexcode_to_codename, noto_stem, EmojiRecord};
use std::path::Path;

/// Place every `Flags (country-flag)` record from `source_dir`.
pub fn place_flags(
    records: &[EmojiRecord],
    source_dir: &Path,
    tree: &OutputTree,
) -> Result<PlacementReport> {
    let mut report = PlacementReport::default();
    for record in records.iter().filter(|r| r.is_country_flag()) {
        let codename = noto_stem(&hexcode_to_codename(record.hexcode()?));
        let name = record.name()?;
        let emoji = record.require_str("emoji")?;

        let original = source_dir.join(format!("{codename}.png"));
        if !copy_asset(&original, &tree.emoji_path(emoji))? {
            report.missing_sources += 1;
            continue;
        }
        copy_asset(&original, &tree.name_path(name))?;
        match country_code(emoji) {
            Some(code) => {
                copy_asset(&original, &tree.code_path(&code))?;
            }
            None => tracing::warn!("flag '{name}' ({codename}) is not a regional indicator pair"),
        }
        report.copied += 1;
    }
    Ok(report)
}
