//! Ingredient name normalization and cleanup.
//!
//! `normalize_name` produces the aggregation key; `display_name` cleans a raw
//! recipe name for display; `split_raw_line` recovers quantity,
//! unit and name from a free-text line such as "2 cups chopped onion".

use std::sync::LazyLock;

use regex::Regex;

/// Preparation words stripped from the start of a name, checked in order
const PREP_PREFIXES: &[&str] = &[
    "fresh", "frozen", "dried", "ground", "chopped", "sliced", "diced", "minced", "grated",
    "shredded",
];

/// Trailing preparation and serving notes removed before keying
const PREP_SUFFIXES: &[&str] = &[
    ", sliced",
    ", chopped",
    ", diced",
    ", minced",
    ", grated",
    ", for garnish",
    ", to taste",
    ", optional",
];

/// Words kept lower-case when title-casing a display name
const SMALL_WORDS: &[&str] = &["and", "or", "of", "the", "with"];

const QUANTITY: &str = r"(?:\d+(?:\.\d+)?|\.\d+)(?:\s+\d+/\d+|/\d+)?";

/// First character of a token that reads as a quantity, vulgar fractions included
const QUANTITY_START: &str = r"[\d.\x{00BC}-\x{00BE}\x{2150}-\x{215E}]";

const UNIT_WORDS: &str = r"cups?|tablespoons?|teaspoons?|tbsps?|tsps?|ounces?|oz|pounds?|lbs?|kilograms?|kgs?|grams?|g|milliliters?|millilitres?|ml|liters?|litres?|l|cans?|slices?|stalks?|cloves?|bunch(?:es)?|sprigs?|leaf|leaves|heads?|pieces?";

static RE_LEADING_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*{QUANTITY}(?:\s*(?:-|to)\s*{QUANTITY})?\s+(?:(?:{UNIT_WORDS})\.?\s+)?(?:of\s+)?"
    ))
    .unwrap()
});

static RE_FILLER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:for the|for|the|of|approximately|about|around|or so|to taste)\s+").unwrap()
});

static RE_TRAILING_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),?\s+(?:divided|plus (?:more|extra) for \w+|plus more as needed|plus extra|optional|to serve|for serving|for garnish|for the top|for decoration|(?:or )?to taste|\((?:divided|optional|to serve|for serving|for garnish)\))$",
    )
    .unwrap()
});

static RE_INNER_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s*(?:-|to)\s*\d+\b").unwrap());

static RE_RAW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?P<qty>{QUANTITY}(?:\s*(?:-|to)\s*{QUANTITY})?)\s+(?:(?P<unit>{UNIT_WORDS})\.?\s+)?(?:of\s+)?(?P<name>.+?)\s*$"
    ))
    .unwrap()
});

// Leading token that looks like a quantity but is not one we parse ("½", "2x")
static RE_RAW_LINE_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?P<qty>{QUANTITY_START}\S*)(?:\s+(?:(?P<unit>{UNIT_WORDS})\.?\s+)?(?:of\s+)?(?P<name>.+?))?\s*$"
    ))
    .unwrap()
});

/// Normalize an ingredient name into its aggregation key
///
/// Lower-cases and trims the name, drops trailing preparation and serving
/// notes ("onion, diced", "flour, divided") and strips one leading
/// preparation word ("chopped onion"). Leading numbers are part of the name.
pub fn normalize_name(raw: &str) -> String {
    normalize_name_with(raw, false)
}

/// Like [`normalize_name`], optionally stripping every leading preparation
/// word ("fresh chopped parsley" → "parsley") instead of only the first.
pub fn normalize_name_with(raw: &str, strip_all_prefixes: bool) -> String {
    let mut name = collapse_whitespace(&raw.to_lowercase());
    name = strip_trailing_notes(&name);

    for suffix in PREP_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.trim_end().to_string();
        }
    }

    loop {
        let Some(rest) = strip_prep_prefix(&name) else {
            break;
        };
        name = rest.to_string();
        if !strip_all_prefixes {
            break;
        }
    }

    name
}

fn strip_prep_prefix(name: &str) -> Option<&str> {
    PREP_PREFIXES.iter().find_map(|prefix| {
        name.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(' '))
            .map(str::trim_start)
            .filter(|rest| !rest.is_empty())
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean an ingredient name for display
///
/// Removes leading amounts and units ("2 cups ", "3 cloves of "), filler
/// words, numeric ranges and trailing serving notes, then title-cases the
/// result. Falls back to the trimmed input if nothing is left.
pub fn display_name(raw: &str) -> String {
    let mut name = RE_FILLER_PREFIX.replace(raw.trim(), "").to_string();
    name = RE_LEADING_AMOUNT.replace(&name, "").to_string();
    name = strip_trailing_notes(&name);
    name = RE_INNER_RANGE.replace_all(&name, "").to_string();

    let cleaned = title_case(&collapse_whitespace(&name));
    if cleaned.is_empty() {
        raw.trim().to_string()
    } else {
        cleaned
    }
}

// Notes can stack ("optional, to taste")
fn strip_trailing_notes(name: &str) -> String {
    let mut name = name.to_string();
    loop {
        let stripped = RE_TRAILING_NOTE.replace(&name, "").to_string();
        if stripped == name {
            return name;
        }
        name = stripped;
    }
}

/// Title-case an already normalized name for the list label
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if SMALL_WORDS.contains(&lower.as_str()) {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quantity, unit and name recovered from a free-text ingredient line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLineParts {
    pub quantity: Option<String>,
    pub unit: String,
    pub name: String,
}

/// Split "2 cups chopped onion" into ("2", "cups", "chopped onion")
///
/// Ranges keep their text ("1-2") so the quantity parser can reject them.
/// A leading token that only looks numeric ("½") still comes back as the
/// quantity. Lines without one come back whole as the name.
pub fn split_raw_line(raw: &str) -> RawLineParts {
    match RE_RAW_LINE
        .captures(raw)
        .or_else(|| RE_RAW_LINE_LOOSE.captures(raw))
    {
        Some(caps) => RawLineParts {
            quantity: caps.name("qty").map(|m| m.as_str().to_string()),
            unit: caps.name("unit").map(|m| m.as_str().to_string()).unwrap_or_default(),
            name: caps.name("name").map(|m| m.as_str().to_string()).unwrap_or_default(),
        },
        None => RawLineParts {
            quantity: None,
            unit: String::new(),
            name: raw.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_lowercases_and_trims() {
        assert_eq!(normalize_name("  Chicken  "), "chicken");
        assert_eq!(normalize_name("TOMATO"), "tomato");
        assert_eq!(normalize_name("red   bell pepper"), "red bell pepper");
    }

    #[test]
    fn test_normalize_name_strips_one_prefix() {
        assert_eq!(normalize_name("Chopped Onion"), "onion");
        assert_eq!(normalize_name("fresh basil"), "basil");
        assert_eq!(normalize_name("ground cumin"), "cumin");
        assert_eq!(normalize_name("fresh chopped parsley"), "chopped parsley");
    }

    #[test]
    fn test_normalize_name_strips_all_prefixes_when_asked() {
        assert_eq!(normalize_name_with("fresh chopped parsley", true), "parsley");
        assert_eq!(normalize_name_with("Dried Minced Onion", true), "onion");
    }

    #[test]
    fn test_normalize_name_keeps_words_that_only_start_like_prefixes() {
        assert_eq!(normalize_name("freshly ground pepper"), "freshly ground pepper");
        assert_eq!(normalize_name("groundnut oil"), "groundnut oil");
        assert_eq!(normalize_name("frozen"), "frozen");
    }

    #[test]
    fn test_normalize_name_strips_trailing_prep_note() {
        assert_eq!(normalize_name("onion, diced"), "onion");
        assert_eq!(normalize_name("Parsley, for garnish"), "parsley");
        assert_eq!(normalize_name("chopped onion"), normalize_name("Onion, diced"));
    }

    #[test]
    fn test_display_name_removes_amounts_and_notes() {
        assert_eq!(display_name("2 cups all-purpose flour, divided"), "All-purpose Flour");
        assert_eq!(display_name("3 cloves of garlic"), "Garlic");
        assert_eq!(display_name("6-8 slices of bread"), "Bread");
        assert_eq!(display_name("about 1 lb ground beef"), "Ground Beef");
        assert_eq!(display_name("salt and pepper, to taste"), "Salt and Pepper");
        assert_eq!(display_name("cilantro (optional)"), "Cilantro");
    }

    #[test]
    fn test_display_name_falls_back_to_raw() {
        assert_eq!(display_name("  "), "");
        assert_eq!(display_name("2"), "2");
    }

    #[test]
    fn test_split_raw_line() {
        assert_eq!(
            split_raw_line("2 cups chopped onion"),
            RawLineParts {
                quantity: Some("2".to_string()),
                unit: "cups".to_string(),
                name: "chopped onion".to_string(),
            }
        );
        assert_eq!(
            split_raw_line("1 1/2 tbsp. olive oil"),
            RawLineParts {
                quantity: Some("1 1/2".to_string()),
                unit: "tbsp".to_string(),
                name: "olive oil".to_string(),
            }
        );
        assert_eq!(
            split_raw_line("1 onion, diced"),
            RawLineParts {
                quantity: Some("1".to_string()),
                unit: String::new(),
                name: "onion, diced".to_string(),
            }
        );
        assert_eq!(split_raw_line("salt").name, "salt");
        assert_eq!(split_raw_line("salt").quantity, None);
    }

    #[test]
    fn test_split_raw_line_keeps_ranges_and_odd_quantities() {
        assert_eq!(
            split_raw_line("1-2 cloves garlic"),
            RawLineParts {
                quantity: Some("1-2".to_string()),
                unit: "cloves".to_string(),
                name: "garlic".to_string(),
            }
        );
        assert_eq!(split_raw_line("2 to 3 cups stock").quantity.as_deref(), Some("2 to 3"));
        assert_eq!(split_raw_line("2 tomatoes").quantity.as_deref(), Some("2"));
        assert_eq!(
            split_raw_line(".5 cup sugar"),
            RawLineParts {
                quantity: Some(".5".to_string()),
                unit: "cup".to_string(),
                name: "sugar".to_string(),
            }
        );
        assert_eq!(
            split_raw_line("½ cup sugar"),
            RawLineParts {
                quantity: Some("½".to_string()),
                unit: "cup".to_string(),
                name: "sugar".to_string(),
            }
        );
        assert_eq!(split_raw_line("3").quantity.as_deref(), Some("3"));
        assert_eq!(split_raw_line("3").name, "");
    }

    #[test]
    fn test_normalize_name_keeps_leading_numbers() {
        assert_eq!(normalize_name("5 spice powder"), "5 spice powder");
        assert_eq!(normalize_name("00 flour"), "00 flour");
        assert_eq!(normalize_name("All-Purpose Flour, divided"), "all-purpose flour");
        assert_eq!(normalize_name("cilantro (optional)"), "cilantro");
    }
}
