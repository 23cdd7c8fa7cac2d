//! Display-name cleanup for upstream emoji descriptions.
//!
//! Names end up as file stems in the `name/` output trees, so the common
//! troublemakers (`:`, `.`, `&`, curly quotes) are rewritten here.

use unicode_normalization::UnicodeNormalization;

/// Quote characters folded into a plain apostrophe.
const SMART_QUOTES: [char; 3] = ['\u{201C}', '\u{201D}', '\u{2019}'];

/// The Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Decompose to NFD and drop combining diacritical marks.
///
/// Base characters outside ASCII (ligatures such as `æ`) survive, so the
/// result is ASCII only when the input was accented Latin to begin with.
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_diacritic(*c)).collect()
}

/// Turn an upstream description into a display name.
///
/// Substitutions run in a fixed order: `:` to `,`, smart quotes to `'`,
/// every `.` removed, `&` to `and`. Whitespace is left exactly as produced.
pub fn normalize_name(description: &str) -> String {
    let mut name: String = remove_accents(description)
        .chars()
        .map(|c| match c {
            ':' => ',',
            c if SMART_QUOTES.contains(&c) => '\'',
            c => c,
        })
        .filter(|&c| c != '.')
        .collect();
    if name.contains('&') {
        name = name.replace('&', "and");
    }
    name
}
