pub mod aggregation;
pub mod ambiguous;
pub mod categorization;
pub mod density;
pub mod error;
pub mod format;
pub mod list;
pub mod names;
pub mod quantity;
pub mod recipe;
pub mod selection;
pub mod standardize;
pub mod units;

// Re-export commonly used types
pub use aggregation::{generate_shopping_list, AggregationOptions, IngredientAggregationService};
pub use categorization::{categorize, CategorizationService, Category};
pub use error::{QuantityError, ShoppingListError};
pub use list::{AggregationWarning, ListSummary, ShoppingList, ShoppingListItem};
pub use names::{display_name, normalize_name};
pub use quantity::{parse_quantity, parse_quantity_lenient};
pub use recipe::{parse_recipes, Amount, IngredientLine, Recipe, RecipeId};
pub use selection::RecipeSelection;
pub use standardize::{standardize, StandardMeasurement};
pub use units::{normalize_unit, Unit, UnitFamily};
