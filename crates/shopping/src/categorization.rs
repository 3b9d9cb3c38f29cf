use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category for grocery store organization
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Seafood,
    #[strum(serialize = "Baking & Spices")]
    #[serde(rename = "Baking & Spices")]
    BakingAndSpices,
    #[strum(serialize = "Grains & Pasta")]
    #[serde(rename = "Grains & Pasta")]
    GrainsAndPasta,
    #[strum(serialize = "Canned Goods")]
    #[serde(rename = "Canned Goods")]
    CannedGoods,
    Frozen,
    #[strum(serialize = "Condiments & Sauces")]
    #[serde(rename = "Condiments & Sauces")]
    CondimentsAndSauces,
    Beverages,
    Snacks,
    #[default]
    Other,
}

/// Keyword sets in evaluation order; the first category whose pattern
/// matches wins. Keywords match anywhere in the name.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "lettuce", "spinach", "kale", "arugula", "cabbage", "carrot", "onion", "garlic",
            "potato", "tomato", "pepper", "cucumber", "zucchini", "squash", "pumpkin", "broccoli",
            "cauliflower", "corn", "pea", "bean", "lentil", "fruit", "apple", "banana", "orange",
            "berry", "lemon", "lime", "herb", "cilantro", "parsley", "basil", "mint", "thyme",
            "rosemary", "avocado", "mushroom",
        ],
    ),
    (
        Category::Dairy,
        &["milk", "cream", "cheese", "yogurt", "butter", "egg", "margarine"],
    ),
    (
        Category::Meat,
        &[
            "beef", "steak", "chicken", "pork", "ham", "bacon", "sausage", "turkey", "meat", "lamb",
            "veal",
        ],
    ),
    (
        Category::Seafood,
        &[
            "fish", "salmon", "tuna", "shrimp", "prawn", "crab", "lobster", "clam", "mussel",
            "oyster", "scallop", "seafood",
        ],
    ),
    (
        Category::BakingAndSpices,
        &[
            "flour", "sugar", "baking powder", "baking soda", "yeast", "salt", "pepper", "spice",
            "cinnamon", "vanilla", "cocoa", "chocolate", "extract",
        ],
    ),
    (
        Category::GrainsAndPasta,
        &[
            "rice", "pasta", "noodle", "spaghetti", "macaroni", "bread", "cereal", "oat", "quinoa",
            "barley", "grain",
        ],
    ),
    (
        Category::CannedGoods,
        &["can", "canned", "jar", "preserved", "soup", "broth", "stock"],
    ),
    (Category::Frozen, &["frozen", "ice cream", "popsicle"]),
    (
        Category::CondimentsAndSauces,
        &[
            "sauce", "ketchup", "mustard", "mayo", "mayonnaise", "vinegar", "oil", "dressing",
            "syrup", "honey", "jam", "jelly",
        ],
    ),
    (
        Category::Beverages,
        &[
            "water", "juice", "soda", "tea", "coffee", "wine", "beer", "alcohol", "drink",
        ],
    ),
    (
        Category::Snacks,
        &["chip", "cracker", "nut", "seed", "snack", "popcorn", "pretzel"],
    ),
];

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let alternation = keywords
                .iter()
                .map(|keyword| regex::escape(keyword))
                .collect::<Vec<_>>()
                .join("|");
            (*category, Regex::new(&alternation).unwrap())
        })
        .collect()
});

/// Categorization Service
///
/// Stateless domain service that maps ingredient names to grocery store
/// categories by keyword matching, in a fixed priority order:
/// Produce, Dairy, Meat, Seafood, Baking & Spices, Grains & Pasta,
/// Canned Goods, Frozen, Condiments & Sauces, Beverages, Snacks.
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by name, defaulting to `Category::Other`
    pub fn categorize(ingredient_name: &str) -> Category {
        let normalized = ingredient_name.trim().to_lowercase();

        CATEGORY_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(&normalized))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }
}

/// Free-function form of [`CategorizationService::categorize`]
pub fn categorize(ingredient_name: &str) -> Category {
    CategorizationService::categorize(ingredient_name)
}
