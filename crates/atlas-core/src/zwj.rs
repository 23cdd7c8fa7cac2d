//! Names for ZWJ sequences that CLDR does not name as a whole.
//!
//! The table ships as `data/zwj-names.txt`, one sequence per line in the
//! usual Unicode data file shape:
//!
//! ```text
//! 1F468 200D 1F466 ; family, man, boy
//! ```

use crate::error::{AtlasError, Result};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN: &str = include_str!("../data/zwj-names.txt");

/// Exact-match lookup from an emoji string to its descriptive name.
#[derive(Debug, Clone, Default)]
pub struct ZwjTable {
    names: HashMap<String, String>,
}

impl ZwjTable {
    /// The compiled-in table.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    /// Load a table file with the same format as the built-in one.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AtlasError::file(path, e))?;
        let table = Self::parse(&text)?;
        tracing::debug!("loaded {} ZWJ names from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse table text. Blank lines and lines starting with `#` are skipped.
    /// The name is everything after the first `;`, so it may contain `#`. A
    /// repeated sequence keeps its last name.
    pub fn parse(text: &str) -> Result<Self> {
        let mut names = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |reason: String| AtlasError::InvalidTable { line: idx + 1, reason };
            let (points, name) = line
                .split_once(';')
                .ok_or_else(|| invalid("expected `<code points> ; <name>`".into()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(invalid("empty name".into()));
            }
            let emoji = points
                .split_whitespace()
                .map(|hex| {
                    u32::from_str_radix(hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| invalid(format!("bad code point {hex:?}")))
                })
                .collect::<Result<String>>()?;
            if emoji.is_empty() {
                return Err(invalid("no code points".into()));
            }
            if let Some(previous) = names.insert(emoji, name.to_string()) {
                tracing::debug!("line {}: {name:?} replaces {previous:?}", idx + 1);
            }
        }
        Ok(Self { names })
    }

    pub fn get(&self, emoji: &str) -> Option<&str> {
        self.names.get(emoji).map(String::as_str)
    }

    pub fn contains(&self, emoji: &str) -> bool {
        self.names.contains_key(emoji)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
