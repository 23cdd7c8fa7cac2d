//! Codename-keyed side tables built from third-party name sources.
//!
//! Both raw inputs key their entries by upstream hexcode (`1F468-200D-1F466`);
//! the image files are named by codename, so the keys are rewritten.

use crate::snapshot::write_text;
use atlas_core::error::{AtlasError, Result};
use atlas_core::hexcode_to_codename;
use serde_json::{Map, Value};
use std::path::Path;

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| AtlasError::file(path, e))?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        _ => Err(AtlasError::UnexpectedShape {
            expected: "object",
            path: path.to_path_buf(),
        }),
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Rekey a CLDR name table by codename, keeping entry order.
pub fn rekey_cldr(raw: Map<String, Value>) -> Map<String, Value> {
    raw.into_iter()
        .map(|(key, value)| (hexcode_to_codename(&key), Value::String(value_text(value))))
        .collect()
}

/// Rekey a shortcode table by codename; single strings become one-element lists.
pub fn rekey_aliases(raw: Map<String, Value>) -> Map<String, Value> {
    raw.into_iter()
        .map(|(key, value)| {
            let aliases = match value {
                Value::Array(items) => items.into_iter().map(|v| Value::String(value_text(v))).collect(),
                other => vec![Value::String(value_text(other))],
            };
            (hexcode_to_codename(&key), Value::Array(aliases))
        })
        .collect()
}

/// `names-cldr-raw.json` → `names-cldr.json`. Returns the entry count.
pub fn build_cldr(input: &Path, output: &Path) -> Result<usize> {
    let table = rekey_cldr(read_object(input)?);
    write_text(output, &serde_json::to_string_pretty(&table)?)?;
    tracing::info!("wrote {} CLDR names to {}", table.len(), output.display());
    Ok(table.len())
}

/// `shortcodes-discord-raw.json` → `aliases.json`. Returns the entry count.
pub fn build_aliases(input: &Path, output: &Path) -> Result<usize> {
    let table = rekey_aliases(read_object(input)?);
    write_text(output, &serde_json::to_string_pretty(&table)?)?;
    tracing::info!("wrote {} alias lists to {}", table.len(), output.display());
    Ok(table.len())
}
