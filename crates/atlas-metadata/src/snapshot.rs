//! Reading and writing record arrays.
//!
//! Snapshots are compact JSON with a line break forced in front of every
//! `{`, which puts each record on its own line and keeps diffs readable.

use atlas_core::error::{AtlasError, Result};
use atlas_core::EmojiRecord;
use serde_json::Value;
use std::path::Path;

/// Read a JSON array of records.
pub fn read_records(path: &Path) -> Result<Vec<EmojiRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| AtlasError::file(path, e))?;
    parse_records(&text, path)
}

pub(crate) fn parse_records(text: &str, path: &Path) -> Result<Vec<EmojiRecord>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(EmojiRecord::new(map)),
                _ => Err(AtlasError::UnexpectedShape {
                    expected: "object per record",
                    path: path.to_path_buf(),
                }),
            })
            .collect(),
        _ => Err(AtlasError::UnexpectedShape {
            expected: "array of records",
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize records as one compact array, one record per line.
pub fn render_records(records: &[EmojiRecord]) -> Result<String> {
    let compact = serde_json::to_string(records)?;
    Ok(compact.replace('{', "\n{"))
}

/// Write `records` to `path`, creating parent directories.
pub fn write_records(path: &Path, records: &[EmojiRecord]) -> Result<()> {
    let text = render_records(records)?;
    write_text(path, &text)
}

pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AtlasError::file(parent, e))?;
        }
    }
    std::fs::write(path, text).map_err(|e| AtlasError::file(path, e))
}
