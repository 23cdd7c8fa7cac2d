//! Clean pass: derive display names and strip fields nobody downstream reads.

use crate::snapshot::{read_records, write_records};
use atlas_core::error::Result;
use atlas_core::{normalize_name, EmojiRecord};
use std::path::Path;

/// Fields removed from every record.
pub const STRIP_FIELDS: &[&str] = &[
    "description", "subgroups", "tags",
    "skintone", "skintone_combination", "skintone_base_emoji", "skintone_base_hexcode",
    "unicode", "order", "unicode_version", "ios_version",
];

/// Add `name` from `description`, then drop [`STRIP_FIELDS`].
///
/// A record without a `description` is an error.
pub fn clean_record(record: &mut EmojiRecord) -> Result<()> {
    let name = normalize_name(record.require_str("description")?);
    record.set("name", name);
    for field in STRIP_FIELDS {
        record.remove(field);
    }
    Ok(())
}

/// Clean every record in place.
pub fn clean_records(records: &mut [EmojiRecord]) -> Result<()> {
    records.iter_mut().try_for_each(clean_record)
}

/// Read the upstream dataset, clean it and write the cleaned snapshot.
///
/// Returns the number of records written.
pub fn clean_file(input: &Path, output: &Path) -> Result<usize> {
    let mut records = read_records(input)?;
    clean_records(&mut records)?;
    write_records(output, &records)?;
    tracing::info!(
        "cleaned {} records from {} into {}",
        records.len(),
        input.display(),
        output.display()
    );
    Ok(records.len())
}
