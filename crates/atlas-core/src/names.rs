//! Codename-keyed side tables and display-name resolution.

use crate::error::{AtlasError, Result};
use crate::zwj::ZwjTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Codename to CLDR short name (`names-cldr.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CldrNames(pub HashMap<String, String>);

/// Codename to shortcode aliases (`aliases.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(pub HashMap<String, Vec<String>>);

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| AtlasError::file(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

impl CldrNames {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    pub fn get(&self, codename: &str) -> Option<&str> {
        self.0.get(codename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AliasMap {
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Aliases of `codename`; empty when it has none.
    pub fn get(&self, codename: &str) -> &[String] {
        self.0.get(codename).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which table supplied a resolved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Zwj,
    Cldr,
}

/// Resolves display names: ZWJ table by emoji first, then CLDR by codename.
#[derive(Debug, Clone)]
pub struct NameResolver {
    zwj: ZwjTable,
    cldr: CldrNames,
}

impl NameResolver {
    pub fn new(zwj: ZwjTable, cldr: CldrNames) -> Self {
        Self { zwj, cldr }
    }

    /// `None` when neither table knows the emoji.
    pub fn resolve(&self, emoji: &str, codename: &str) -> Option<(&str, NameSource)> {
        if let Some(name) = self.zwj.get(emoji) {
            return Some((name, NameSource::Zwj));
        }
        self.cldr.get(codename).map(|name| (name, NameSource::Cldr))
    }
}
