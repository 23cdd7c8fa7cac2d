//! Exclusion rules for the "inoffensive" output variant.
//!
//! The lists are editorial choices, not derivable data; keep them verbatim.

/// Names excluded by exact match.
const EXCLUDED_NAMES: &[&str] = &[
    // religious symbols
    "star of David", "wheel of dharma", "yin yang", "latin cross", "orthodox cross",
    "star and crescent", "menorah", "dotted six-pointed star", "khanda",
    // hair components, regenerated separately
    "red hair", "curly hair", "white hair", "bald",
    // age, smoking, violence
    "no one under eighteen", "no smoking", "cigarette", "bomb",
    // places of worship and landmarks
    "church", "mosque", "hindu temple", "synagogue", "shinto shrine", "kaaba",
    "map of Japan", "wedding", "Tokyo tower", "Statue of Liberty",
    // alcohol and innuendo
    "sake", "love hotel", "breast-feeding", "eggplant", "peach",
    "bottle with popping cork", "wine glass", "cocktail glass", "tropical drink",
    "beer mug", "clinking beer mugs", "clinking glasses", "tumbler glass", "drunk person",
    // people
    "trump", "Greta Thunberg",
    // brands and logos
    "Twitter", "pinterest", "facebook", "instagram", "youtube", "github", "linkedin",
    "android", "musicbrainz", "openfoodfact", "openstreetmap", "wikidata",
    "Firefox", "Safari", "Opera", "Chromium", "Chrome", "Netscape Navigator",
    "Internet Explorer", "Edge", "iNaturalist", "gitlab", "mastodon", "peertube",
    "pixelfed", "signal", "element", "jellyfin", "reddit", "discord",
    "c", "cplusplus", "csharp", "chrome canary", "firefox developer", "firefox nightly",
    "javascript", "typescript", "webassembly", "svg", "markdown", "winrar",
    "ubuntu", "windows", "artstation", "apple",
];

/// Relationship groupings, excluded by name prefix.
const EXCLUDED_PREFIXES: &[&str] = &["family", "couple", "kiss", "pregnant"];

/// Suffix of every skin-tone variant; the variant ships grayscale.
const SKIN_TONE_SUFFIX: &str = "skin tone";

/// Substrings that exclude a name anywhere they occur.
const EXCLUDED_SUBSTRINGS: &[&str] = &["flag", "holding hands"];

/// `true` when `name` must not appear in the inoffensive output.
pub fn is_excluded(name: &str) -> bool {
    name.ends_with(SKIN_TONE_SUFFIX)
        || EXCLUDED_SUBSTRINGS.iter().any(|s| name.contains(s))
        || EXCLUDED_NAMES.contains(&name)
        || EXCLUDED_PREFIXES.iter().any(|p| name.starts_with(p))
}
