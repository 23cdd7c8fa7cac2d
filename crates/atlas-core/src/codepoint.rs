//! Conversion between emoji strings and `emoji_u<hex>_<hex>...` codenames.
//!
//! Codenames are the stems of the Noto image files. They spell out every code
//! point in lowercase hex, zero-padded to four digits, but Noto omits the
//! emoji presentation selector, so decoding puts U+FE0F back after each BMP
//! code point. Joiners, the keycap mark and the selector itself are exempt.

use crate::error::{AtlasError, Result};

pub const CODENAME_PREFIX: &str = "emoji_u";
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';
pub const COMBINING_ENCLOSING_KEYCAP: char = '\u{20E3}';

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;

/// Encode an emoji string as a codename, one lowercase hex token per code point.
pub fn emoji_to_codename(emoji: &str) -> String {
    let tokens: Vec<String> = emoji.chars().map(|c| format!("{:04x}", c as u32)).collect();
    format!("{CODENAME_PREFIX}{}", tokens.join("_"))
}

/// Decode a codename back into the emoji string it names.
///
/// An explicit `fe0f` token right after an inserted selector is absorbed, so
/// codenames that spell the selector out decode the same as Noto's own.
///
/// Fails on a missing prefix, an empty token, a non-hex token or a value
/// that is not a Unicode scalar.
pub fn codename_to_emoji(codename: &str) -> Result<String> {
    let invalid = |reason: String| AtlasError::InvalidCodename {
        codename: codename.to_string(),
        reason,
    };
    let hex = codename
        .strip_prefix(CODENAME_PREFIX)
        .ok_or_else(|| invalid(format!("missing `{CODENAME_PREFIX}` prefix")))?;

    let mut emoji = String::with_capacity(hex.len());
    for token in hex.split('_') {
        let value = u32::from_str_radix(token, 16)
            .map_err(|e| invalid(format!("token {token:?}: {e}")))?;
        let c = char::from_u32(value)
            .ok_or_else(|| invalid(format!("U+{value:X} is not a scalar value")))?;
        if c == VARIATION_SELECTOR_16 && emoji.ends_with(VARIATION_SELECTOR_16) {
            continue;
        }
        emoji.push(c);
        if takes_selector(c) {
            emoji.push(VARIATION_SELECTOR_16);
        }
    }
    Ok(emoji)
}

fn takes_selector(c: char) -> bool {
    (c as u32) < 0x10000
        && !matches!(
            c,
            ZERO_WIDTH_JOINER | VARIATION_SELECTOR_16 | COMBINING_ENCLOSING_KEYCAP
        )
}

/// Rewrite an upstream hexcode (`1F468-200D-1F466`) in codename form.
///
/// Values that already carry the `emoji_u` prefix pass through untouched.
pub fn hexcode_to_codename(hexcode: &str) -> String {
    if hexcode.starts_with(CODENAME_PREFIX) {
        return hexcode.to_string();
    }
    format!("{CODENAME_PREFIX}{}", hexcode.replace('-', "_").to_lowercase())
}

/// Stem of the Noto image file for `codename`: every `fe0f` token dropped.
///
/// Accepts codenames from [`emoji_to_codename`] and [`hexcode_to_codename`]
/// alike; token case is ignored.
pub fn noto_stem(codename: &str) -> String {
    let Some(hex) = codename.strip_prefix(CODENAME_PREFIX) else {
        return codename.to_string();
    };
    let tokens: Vec<&str> = hex
        .split('_')
        .filter(|token| !token.eq_ignore_ascii_case("fe0f"))
        .collect();
    format!("{CODENAME_PREFIX}{}", tokens.join("_"))
}

/// Two-letter region code of a country flag, e.g. `🇯🇵` to `JP`.
///
/// Only the first two code points are inspected; both must be regional
/// indicator symbols.
pub fn country_code(flag: &str) -> Option<String> {
    let mut chars = flag.chars();
    let first = regional_letter(chars.next()?)?;
    let second = regional_letter(chars.next()?)?;
    Some([first, second].iter().collect())
}

fn regional_letter(c: char) -> Option<char> {
    let value = c as u32;
    if !(REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).contains(&value) {
        return None;
    }
    char::from_u32(value - REGIONAL_INDICATOR_A + 'A' as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_points(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn test_grinning_face_codename() {
        assert_eq!(emoji_to_codename("😀"), "emoji_u1f600");
    }

    #[test]
    fn test_bmp_code_point_is_padded() {
        assert_eq!(emoji_to_codename("#"), "emoji_u0023");
    }

    #[test]
    fn test_zwj_sequence_codename() {
        assert_eq!(
            emoji_to_codename("👨\u{200D}👦"),
            "emoji_u1f468_200d_1f466"
        );
    }

    #[test]
    fn test_keycap_gets_selector_after_digit_only() {
        let emoji = codename_to_emoji("emoji_u0030_20e3").unwrap();
        assert_eq!(code_points(&emoji), vec![0x30, 0xFE0F, 0x20E3]);
    }

    #[test]
    fn test_round_trip_keycap() {
        let e = "#\u{FE0F}\u{20E3}";
        assert_eq!(codename_to_emoji(&emoji_to_codename(e)).unwrap(), e);
    }

    #[test]
    fn test_explicit_selector_token_is_not_doubled() {
        let e = "👨\u{200D}\u{2764}\u{FE0F}\u{200D}👨";
        assert_eq!(codename_to_emoji(&emoji_to_codename(e)).unwrap(), e);
    }

    #[test]
    fn test_supplementary_code_point_has_no_selector() {
        assert_eq!(codename_to_emoji("emoji_u1f600").unwrap(), "😀");
    }

    #[test]
    fn test_joiner_has_no_selector() {
        let emoji = codename_to_emoji("emoji_u1f468_200d_2764_200d_1f468").unwrap();
        assert_eq!(
            code_points(&emoji),
            vec![0x1F468, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F468]
        );
    }

    #[test]
    fn test_round_trip_supplementary() {
        let e = "🦊";
        assert_eq!(codename_to_emoji(&emoji_to_codename(e)).unwrap(), e);
    }

    #[test]
    fn test_round_trip_zwj_family() {
        let e = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
        assert_eq!(codename_to_emoji(&emoji_to_codename(e)).unwrap(), e);
    }

    #[test]
    fn test_round_trip_bmp_with_selector() {
        let e = "\u{2764}\u{FE0F}";
        let codename = emoji_to_codename(e);
        assert_eq!(codename, "emoji_u2764_fe0f");
        // Noto names drop the selector; the stripped form decodes to `e`.
        assert_eq!(codename_to_emoji("emoji_u2764").unwrap(), e);
    }

    #[test]
    fn test_uppercase_tokens_decode() {
        assert_eq!(codename_to_emoji("emoji_u1F600").unwrap(), "😀");
    }

    #[test]
    fn test_non_hex_token_fails() {
        let err = codename_to_emoji("emoji_u1f60g").unwrap_err();
        assert!(matches!(err, AtlasError::InvalidCodename { .. }));
    }

    #[test]
    fn test_missing_prefix_fails() {
        assert!(codename_to_emoji("1f600").is_err());
    }

    #[test]
    fn test_surrogate_value_fails() {
        assert!(codename_to_emoji("emoji_ud800").is_err());
    }

    #[test]
    fn test_empty_token_fails() {
        assert!(codename_to_emoji("emoji_u1f600__200d").is_err());
    }

    #[test]
    fn test_hexcode_to_codename() {
        assert_eq!(hexcode_to_codename("1F468-200D-1F466"), "emoji_u1f468_200d_1f466");
        assert_eq!(hexcode_to_codename("emoji_u1f600"), "emoji_u1f600");
    }

    #[test]
    fn test_noto_stem_drops_selectors() {
        assert_eq!(noto_stem(&hexcode_to_codename("2764-FE0F")), "emoji_u2764");
        assert_eq!(noto_stem(&hexcode_to_codename("0023-FE0F-20E3")), "emoji_u0023_20e3");
        assert_eq!(
            noto_stem(&emoji_to_codename("👨\u{200D}\u{2764}\u{FE0F}\u{200D}👨")),
            "emoji_u1f468_200d_2764_200d_1f468"
        );
        assert_eq!(noto_stem("emoji_u1f600"), "emoji_u1f600");
    }

    #[test]
    fn test_noto_stem_decodes_like_selector_form() {
        let stem = noto_stem(&hexcode_to_codename("2764-FE0F"));
        assert_eq!(codename_to_emoji(&stem).unwrap(), "\u{2764}\u{FE0F}");
    }

    #[test]
    fn test_country_code() {
        assert_eq!(country_code("🇯🇵").as_deref(), Some("JP"));
        assert_eq!(country_code("🇺🇸").as_deref(), Some("US"));
    }

    #[test]
    fn test_country_code_rejects_other_flags() {
        assert_eq!(country_code("🏳\u{FE0F}\u{200D}🌈"), None);
        assert_eq!(country_code("🇯"), None);
    }
}
