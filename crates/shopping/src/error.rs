use thiserror::Error;

/// Why a quantity string could not be turned into a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity is empty")]
    Empty,

    #[error("Invalid number format: {0}")]
    Invalid(String),

    #[error("Negative quantities are not allowed: {0}")]
    Negative(String),

    #[error("Denominator cannot be zero: {0}")]
    ZeroDenominator(String),
}

/// Error types for shopping list generation and item operations
#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("Invalid quantity for '{ingredient}' in recipe {recipe_id}: {source}")]
    InvalidQuantity {
        recipe_id: String,
        ingredient: String,
        #[source]
        source: QuantityError,
    },

    #[error("Shopping list item not found: {0}")]
    ItemNotFound(String),

    #[error("Recipe not selected: {0}")]
    RecipeNotFound(String),

    #[error("Invalid recipe data: {0}")]
    Json(#[from] serde_json::Error),
}
