use crate::*;
use atlas_core::{AtlasError, ColorKind, EmojiRecord};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

fn record(value: Value) -> EmojiRecord {
    serde_json::from_value(value).unwrap()
}

fn write_json(dir: &Path, file: &str, value: &Value) -> std::path::PathBuf {
    let path = dir.join(file);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

// ========== Clean ==========

#[test]
fn test_clean_derives_name() {
    let mut r = record(json!({"emoji": "☕", "description": "hot beverage: café"}));
    clean_record(&mut r).unwrap();
    assert_eq!(r.name().unwrap(), "hot beverage, cafe");
}

#[test]
fn test_clean_strips_fields() {
    let mut r = record(json!({
        "emoji": "😀", "hexcode": "1F600", "category": "Smileys & Emotion (face-smiling)",
        "description": "grinning face", "subgroups": "face-smiling", "tags": ["face"],
        "skintone": "", "skintone_combination": "", "skintone_base_emoji": "",
        "skintone_base_hexcode": "", "unicode": "1.0", "order": 1,
        "unicode_version": "6.1", "ios_version": "6.0", "aliases": ["grinning"]
    }));
    clean_record(&mut r).unwrap();
    let keys: Vec<&str> = r.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["emoji", "hexcode", "category", "aliases", "name"]);
}

#[test]
fn test_clean_missing_description() {
    let mut r = record(json!({"emoji": "😀"}));
    let err = clean_record(&mut r).unwrap_err();
    assert!(matches!(err, AtlasError::MissingField { ref field, .. } if field == "description"));
}

#[test]
fn test_clean_file_line_per_record() {
    let tmp = TempDir::new().unwrap();
    let input = write_json(tmp.path(), "emoji.json", &json!([
        {"emoji": "😀", "hexcode": "1F600", "description": "grinning face", "order": 1},
        {"emoji": "🇯🇵", "hexcode": "1F1EF-1F1F5", "description": "flag: Japan", "order": 2}
    ]));
    let output = tmp.path().join("out/noto-emoji-cleaned.json");
    assert_eq!(clean_file(&input, &output).unwrap(), 2);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("[\n{"));
    assert_eq!(text.matches("\n{").count(), 2);
    let back = read_records(&output).unwrap();
    assert_eq!(back[1].name().unwrap(), "flag, Japan");
    assert!(back[0].get_str("description").is_none());
}

#[test]
fn test_read_records_rejects_object() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(tmp.path(), "bad.json", &json!({"emoji": "😀"}));
    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, AtlasError::UnexpectedShape { .. }));
}

#[test]
fn test_read_records_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    std::fs::write(&path, "[{\"emoji\": ").unwrap();
    assert!(matches!(read_records(&path).unwrap_err(), AtlasError::Json(_)));
}

#[test]
fn test_read_records_missing_file() {
    let err = read_records(Path::new("/nonexistent/emoji.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/emoji.json"));
}

// ========== Dedup ==========

#[test]
fn test_used_names_first_use() {
    let mut used = UsedNames::new();
    assert!(used.first_use("cat"));
    assert!(!used.first_use("cat"));
    assert!(used.first_use("dog"));
    assert_eq!(used.len(), 2);
}

#[test]
fn test_dedup_first_wins() {
    let records = vec![
        record(json!({"name": "keycap, 0", "hexcode": "0030-FE0F-20E3"})),
        record(json!({"name": "keycap, 0", "hexcode": "0030-20E3"})),
        record(json!({"name": "cat", "hexcode": "1F408"})),
    ];
    let outcome = dedup_by_name(records, &[]).unwrap();
    assert_eq!(outcome.kept.len(), 2);
    assert_eq!(outcome.dropped, 1);
    assert_eq!(outcome.kept[0].hexcode().unwrap(), "0030-FE0F-20E3");
}

#[test]
fn test_dedup_strips_fields_from_survivors() {
    let records = vec![record(json!({"name": "cat", "hexcode": "1F408", "emoji": "🐈"}))];
    let outcome = dedup_by_name(records, &["hexcode"]).unwrap();
    assert!(outcome.kept[0].get_str("hexcode").is_none());
    assert_eq!(outcome.kept[0].emoji(), Some("🐈"));
}

#[test]
fn test_dedup_missing_name() {
    let records = vec![record(json!({"hexcode": "1F408"}))];
    assert!(dedup_by_name(records, &[]).is_err());
}

#[test]
fn test_write_info() {
    let tmp = TempDir::new().unwrap();
    let cleaned = write_json(tmp.path(), "cleaned.json", &json!([
        {"emoji": "🐈", "hexcode": "1F408", "name": "cat"},
        {"emoji": "🐱", "hexcode": "1F431", "name": "cat"},
        {"emoji": "🐕", "hexcode": "1F415", "name": "dog"}
    ]));
    let info = tmp.path().join("noto-emoji-info.json");
    let outcome = write_info(&cleaned, &info).unwrap();
    assert_eq!(outcome.dropped, 1);

    let back = read_records(&info).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].emoji(), Some("🐈"));
    assert!(back.iter().all(|r| r.get_str("hexcode").is_none()));
}

// ========== Side tables ==========

#[test]
fn test_rekey_cldr() {
    let raw = json!({"1F600": "grinning face", "1F468-200D-1F466": "family: man, boy"});
    let Value::Object(raw) = raw else { unreachable!() };
    let table = rekey_cldr(raw);
    let keys: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["emoji_u1f600", "emoji_u1f468_200d_1f466"]);
    assert_eq!(table["emoji_u1f600"], "grinning face");
}

#[test]
fn test_rekey_aliases_normalizes_strings() {
    let raw = json!({"1F600": "grinning", "1F604": ["smile", "happy"]});
    let Value::Object(raw) = raw else { unreachable!() };
    let table = rekey_aliases(raw);
    assert_eq!(table["emoji_u1f600"], json!(["grinning"]));
    assert_eq!(table["emoji_u1f604"], json!(["smile", "happy"]));
}

#[test]
fn test_build_side_tables_round_trip_through_core() {
    let tmp = TempDir::new().unwrap();
    let cldr_raw = write_json(tmp.path(), "names-cldr-raw.json", &json!({"1F600": "grinning face"}));
    let aliases_raw = write_json(tmp.path(), "shortcodes.json", &json!({"1F600": "grinning"}));
    let cldr = tmp.path().join("names-cldr.json");
    let aliases = tmp.path().join("aliases.json");

    assert_eq!(build_cldr(&cldr_raw, &cldr).unwrap(), 1);
    assert_eq!(build_aliases(&aliases_raw, &aliases).unwrap(), 1);

    let names = atlas_core::CldrNames::load(&cldr).unwrap();
    assert_eq!(names.get("emoji_u1f600"), Some("grinning face"));
    let alias_map = atlas_core::AliasMap::load(&aliases).unwrap();
    assert_eq!(alias_map.get("emoji_u1f600"), ["grinning".to_string()]);
}

#[test]
fn test_build_cldr_rejects_array() {
    let tmp = TempDir::new().unwrap();
    let raw = write_json(tmp.path(), "raw.json", &json!(["grinning face"]));
    let err = build_cldr(&raw, &tmp.path().join("out.json")).unwrap_err();
    assert!(matches!(err, AtlasError::UnexpectedShape { expected: "object", .. }));
}

// ========== Report ==========

#[test]
fn test_render_html_items() {
    let records = vec![
        record(json!({"emoji": "🐈", "name": "cat"})),
        record(json!({"name": "artstation"})),
    ];
    let html = render_html(&records, ColorKind::Color).unwrap();
    assert!(html.starts_with("<!doctype html>\n<html>\n<head>\n\t<title>NotoEmoji Preview</title>"));
    assert!(html.contains("\t\t<img src=\"color/name/cat.png\" alt=\"cat\" />\n\t\t<p>🐈</p>\n\t\t<p>cat</p>\n\t</div>\n"));
    assert!(html.contains("<img src=\"color/name/artstation.png\" alt=\"artstation\" />\n\t\t<p>artstation</p>"));
    assert_eq!(html.matches("<div class=\"item\">").count(), 2);
    assert!(html.ends_with("</div>\n</body>\n</html>\n"));
}

#[test]
fn test_render_html_black_kind() {
    let records = vec![record(json!({"emoji": "🐈", "name": "cat"}))];
    let html = render_html(&records, ColorKind::Black).unwrap();
    assert!(html.contains("src=\"black/name/cat.png\""));
}

#[test]
fn test_render_html_empty_emoji_is_skipped() {
    let records = vec![record(json!({"emoji": "", "name": "cat"}))];
    let html = render_html(&records, ColorKind::Color).unwrap();
    assert!(!html.contains("<p></p>"));
}

#[test]
fn test_write_html() {
    let tmp = TempDir::new().unwrap();
    let info = write_json(tmp.path(), "info.json", &json!([{"emoji": "🐕", "name": "dog"}]));
    let out = tmp.path().join("index.html");
    assert_eq!(write_html(&info, &out, ColorKind::Color).unwrap(), 1);
    assert!(std::fs::read_to_string(&out).unwrap().contains("<p>dog</p>"));
}
