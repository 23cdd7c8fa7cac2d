use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Colour variant of the source art (the `color` or `black` Noto sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    #[default]
    Color,
    Black,
}

impl ColorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" | "colour" => Ok(Self::Color),
            "black" => Ok(Self::Black),
            other => Err(format!("unknown color kind {other:?} (expected color or black)")),
        }
    }
}

/// Raster size of a placement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSize {
    /// 72x72, placed straight from the raw directory listing.
    Large,
    /// 32x32, placed from the cleaned metadata.
    Mid,
    /// 24x24, placed from the cleaned metadata.
    Small,
}

impl AssetSize {
    pub fn pixels(&self) -> u32 {
        match self {
            Self::Large => 72,
            Self::Mid => 32,
            Self::Small => 24,
        }
    }

    /// Infix used in output tree names (`renamed-mid-color`).
    pub fn tree_infix(&self) -> &'static str {
        match self {
            Self::Large => "",
            Self::Mid => "mid-",
            Self::Small => "small-",
        }
    }
}

impl FromStr for AssetSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "large" | "72" => Ok(Self::Large),
            "mid" | "32" => Ok(Self::Mid),
            "small" | "24" => Ok(Self::Small),
            other => Err(format!("unknown size {other:?} (expected large, mid or small)")),
        }
    }
}

/// One entry of the upstream emoji dataset.
///
/// Records are kept as ordered JSON objects so fields this pipeline does not
/// know about pass through the clean and info passes untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiRecord {
    pub fields: Map<String, Value>,
}

impl EmojiRecord {
    pub const CATEGORY_COUNTRY_FLAG: &'static str = "Flags (country-flag)";

    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String value of `field`, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// String value of `field`, or [`AtlasError::MissingField`].
    pub fn require_str(&self, field: &str) -> Result<&str> {
        self.get_str(field).ok_or_else(|| AtlasError::MissingField {
            field: field.to_string(),
            record: self.summary(),
        })
    }

    pub fn name(&self) -> Result<&str> {
        self.require_str("name")
    }

    pub fn emoji(&self) -> Option<&str> {
        self.get_str("emoji")
    }

    pub fn hexcode(&self) -> Result<&str> {
        self.require_str("hexcode")
    }

    pub fn category(&self) -> Option<&str> {
        self.get_str("category")
    }

    pub fn is_country_flag(&self) -> bool {
        self.category() == Some(Self::CATEGORY_COUNTRY_FLAG)
    }

    /// Alias strings; a lone string counts as a one-element list.
    pub fn aliases(&self) -> Vec<&str> {
        match self.fields.get("aliases") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(alias)) => vec![alias.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    /// Short identification for error messages.
    pub fn summary(&self) -> String {
        let id = ["hexcode", "name", "description", "emoji"]
            .iter()
            .find_map(|f| self.get_str(f).map(|v| format!("{f}={v:?}")));
        id.unwrap_or_else(|| format!("<{} fields>", self.fields.len()))
    }
}

impl From<Map<String, Value>> for EmojiRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EmojiRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_accessors() {
        let r = record(json!({
            "emoji": "🇯🇵", "hexcode": "1F1EF-1F1F5", "name": "flag, Japan",
            "category": "Flags (country-flag)", "aliases": ["jp", "flag_jp"]
        }));
        assert_eq!(r.name().unwrap(), "flag, Japan");
        assert_eq!(r.emoji(), Some("🇯🇵"));
        assert!(r.is_country_flag());
        assert_eq!(r.aliases(), vec!["jp", "flag_jp"]);
    }

    #[test]
    fn test_missing_name_is_error() {
        let r = record(json!({"hexcode": "1F600"}));
        let err = r.name().unwrap_err();
        assert!(err.to_string().contains("hexcode=\"1F600\""));
    }

    #[test]
    fn test_single_alias_string() {
        let r = record(json!({"aliases": "smile"}));
        assert_eq!(r.aliases(), vec!["smile"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut r = record(json!({"a": 1, "b": 2, "c": 3}));
        r.remove("b");
        let keys: Vec<&String> = r.fields.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_color_kind_parse() {
        assert_eq!("black".parse::<ColorKind>().unwrap(), ColorKind::Black);
        assert_eq!("Color".parse::<ColorKind>().unwrap(), ColorKind::Color);
        assert!("red".parse::<ColorKind>().is_err());
    }

    #[test]
    fn test_asset_size_parse() {
        assert_eq!("mid".parse::<AssetSize>().unwrap(), AssetSize::Mid);
        assert_eq!("24".parse::<AssetSize>().unwrap(), AssetSize::Small);
        assert_eq!(AssetSize::Large.pixels(), 72);
    }
}
