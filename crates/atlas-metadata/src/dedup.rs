//! First-seen-wins deduplication by display name.

use crate::snapshot::{read_records, write_records};
use atlas_core::error::Result;
use atlas_core::EmojiRecord;
use std::collections::HashSet;
use std::path::Path;

/// Names already claimed during one pass.
#[derive(Debug, Clone, Default)]
pub struct UsedNames {
    seen: HashSet<String>,
}

impl UsedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { seen: HashSet::with_capacity(capacity) }
    }

    /// Claim `name`; `false` if an earlier record already has it.
    pub fn first_use(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Result of a dedup pass.
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    pub kept: Vec<EmojiRecord>,
    pub dropped: usize,
}

/// Keep the first record for each `name`, removing `strip` fields from the
/// survivors. Later records with a taken name are dropped, not merged.
pub fn dedup_by_name(records: Vec<EmojiRecord>, strip: &[&str]) -> Result<DedupOutcome> {
    let mut used = UsedNames::with_capacity(records.len());
    let mut outcome = DedupOutcome::default();
    for mut record in records {
        if used.first_use(record.name()?) {
            for field in strip {
                record.remove(field);
            }
            outcome.kept.push(record);
        } else {
            outcome.dropped += 1;
        }
    }
    Ok(outcome)
}

/// Write the info snapshot: cleaned records deduplicated by name, without `hexcode`.
pub fn write_info(cleaned: &Path, output: &Path) -> Result<DedupOutcome> {
    let records = read_records(cleaned)?;
    let outcome = dedup_by_name(records, &["hexcode"])?;
    write_records(output, &outcome.kept)?;
    tracing::info!(
        "wrote {} records to {} ({} duplicate names dropped)",
        outcome.kept.len(),
        output.display(),
        outcome.dropped
    );
    Ok(outcome)
}
