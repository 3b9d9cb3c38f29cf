//! Approximate ingredient densities for crossing the volume/weight boundary.
//!
//! Values are grams per millilitre and only need to be close enough for a
//! shopping trip.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Density used for liquids that are not in the table
pub const DEFAULT_LIQUID_DENSITY: f64 = 1.0;

/// Density used for solids that are not in the table
pub const DEFAULT_SOLID_DENSITY: f64 = 0.6;

static INGREDIENT_DENSITY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("water", 1.0),
        ("milk", 1.03),
        ("olive oil", 0.92),
        ("vegetable oil", 0.92),
        ("oil", 0.92),
        ("flour", 0.53),
        ("all-purpose flour", 0.53),
        ("sugar", 0.85),
        ("granulated sugar", 0.85),
        ("brown sugar", 0.72),
        ("salt", 1.22),
        ("butter", 0.91),
        ("honey", 1.42),
        ("maple syrup", 1.32),
        ("rice", 0.75),
        ("oats", 0.42),
        ("yogurt", 1.03),
    ])
});

/// Table keys ordered longest first (alphabetical within a length), so the
/// most specific substring match wins regardless of map iteration order.
static DENSITY_KEYS_BY_SPECIFICITY: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keys: Vec<&'static str> = INGREDIENT_DENSITY.keys().copied().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys
});

const LIQUID_WORDS: &[&str] = &[
    "water", "milk", "oil", "juice", "broth", "sauce", "vinegar", "syrup", "honey", "extract",
    "wine", "beer", "liquor",
];

/// Whether an ingredient name indicates a liquid
pub fn is_liquid(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    LIQUID_WORDS.iter().any(|word| name.contains(word))
}

/// Density from the table only: exact match, then the most specific substring
pub fn lookup_density(name: &str) -> Option<f64> {
    let name = name.trim().to_lowercase();

    if let Some(density) = INGREDIENT_DENSITY.get(name.as_str()) {
        return Some(*density);
    }

    DENSITY_KEYS_BY_SPECIFICITY
        .iter()
        .find(|key| name.contains(*key))
        .and_then(|key| INGREDIENT_DENSITY.get(key).copied())
}

/// Density in g/ml, falling back to a liquid or solid default
pub fn density_of(name: &str) -> f64 {
    match lookup_density(name) {
        Some(density) => density,
        None => {
            let fallback = if is_liquid(name) {
                DEFAULT_LIQUID_DENSITY
            } else {
                DEFAULT_SOLID_DENSITY
            };
            tracing::debug!(ingredient = name, fallback, "No density entry, using default");
            fallback
        }
    }
}
