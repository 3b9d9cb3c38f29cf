use std::collections::HashSet;
use std::sync::LazyLock;

/// Quantity phrases that cannot be measured and are not parse failures either
static AMBIGUOUS_QUANTITIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pinch",
        "a pinch",
        "dash",
        "a dash",
        "to taste",
        "taste",
        "handful",
        "a handful",
        "some",
        "sprinkle",
        "a sprinkle",
        "as needed",
    ])
});

/// Check if a quantity string is a non-numeric kitchen phrase
///
/// Returns true for quantities like "a pinch", "to taste", "dash" or
/// "pinch of", and false for numbers and for arbitrary garbage, which the
/// quantity parser reports on its own.
pub fn is_ambiguous_quantity(quantity_str: &str) -> bool {
    let normalized = quantity_str.trim().to_lowercase();

    if normalized.is_empty() {
        return false;
    }

    if AMBIGUOUS_QUANTITIES.contains(normalized.as_str()) {
        return true;
    }

    if normalized.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    AMBIGUOUS_QUANTITIES.iter().any(|keyword| {
        normalized.starts_with(&format!("{keyword} ")) || normalized.ends_with(&format!(" {keyword}"))
    })
}
