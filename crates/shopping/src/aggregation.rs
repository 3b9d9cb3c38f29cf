use std::collections::HashMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ambiguous::is_ambiguous_quantity;
use crate::categorization::CategorizationService;
use crate::error::{QuantityError, ShoppingListError};
use crate::format::{format_display_text, format_measurement, format_quantity};
use crate::list::{AggregationWarning, ShoppingList, ShoppingListItem};
use crate::names::{normalize_name_with, split_raw_line, title_case};
use crate::quantity::parse_quantity;
use crate::recipe::{Amount, IngredientLine, Recipe, RecipeId};
use crate::standardize::standardize;
use crate::units::{Unit, UnitFamily};

/// Namespace for item ids derived from the aggregation key
const ITEM_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f0f_8f5e_2d3c_4b8a_9a51_3c1e_77d2_a4b0);

/// Knobs for one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationOptions {
    /// Fail on the first unparseable quantity instead of counting it as zero
    #[serde(default)]
    pub strict_quantities: bool,
    /// Strip every leading preparation word instead of only the first
    #[serde(default)]
    pub strip_all_prefixes: bool,
}

/// One group of lines sharing an aggregation key
struct Group {
    amount: f64,
    original_amount: Option<Amount>,
    original_unit: String,
    recipe_ids: Vec<RecipeId>,
    is_ambiguous: bool,
}

/// Amount of a single line after parsing
struct LineAmount {
    value: f64,
    is_ambiguous: bool,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that normalizes ingredient names and units,
/// sums quantities per (normalized name, canonical unit) and builds the
/// categorized, standardized shopping list.
///
/// - "chicken 2 lb" + "chicken 1 lb" = "chicken 3 lb" (1361 g)
/// - "2 cups chopped onion" + "1 cup onion, diced" = "onion 3 cup"
/// - "onion 1 whole" + "onion 1 cup" = 2 separate line items
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Aggregate every ingredient line of every recipe into one list
    ///
    /// Lines with unparseable amounts contribute zero and add a warning,
    /// unless `strict_quantities` is set, in which case the first such line
    /// fails the run.
    pub fn aggregate(
        recipes: &[Recipe],
        options: &AggregationOptions,
    ) -> Result<ShoppingList, ShoppingListError> {
        let strict = options.strict_quantities;
        aggregate_with(
            recipes,
            options.strip_all_prefixes,
            |warnings, recipe_id, ingredient, source| {
                if strict {
                    return Err(ShoppingListError::InvalidQuantity {
                        recipe_id: recipe_id.to_string(),
                        ingredient: ingredient.to_string(),
                        source,
                    });
                }
                push_warning(warnings, recipe_id, ingredient, &source.to_string());
                Ok(())
            },
        )
    }
}

/// Generate a shopping list with the permissive defaults
///
/// Never fails: malformed quantities show up in `warnings` instead.
pub fn generate_shopping_list(recipes: &[Recipe]) -> ShoppingList {
    let Ok(list) = aggregate_with::<Infallible>(
        recipes,
        false,
        |warnings, recipe_id, ingredient, source| {
            push_warning(warnings, recipe_id, ingredient, &source.to_string());
            Ok(())
        },
    );
    list
}

/// Group, sum and build the list
///
/// `on_invalid` decides what an unparseable amount does: record a warning and
/// count the line as zero, or stop the run with its error.
#[tracing::instrument(skip_all, fields(recipes = recipes.len()))]
fn aggregate_with<E>(
    recipes: &[Recipe],
    strip_all_prefixes: bool,
    mut on_invalid: impl FnMut(
        &mut Vec<AggregationWarning>,
        &RecipeId,
        &str,
        QuantityError,
    ) -> Result<(), E>,
) -> Result<ShoppingList, E> {
    let mut groups: HashMap<(String, Unit), Group> = HashMap::new();
    let mut warnings = Vec::new();

    for recipe in recipes {
        if recipe.ingredients.is_empty() {
            tracing::debug!(recipe_id = %recipe.id, "Recipe has no ingredients");
            continue;
        }

        for line in &recipe.ingredients {
            let (name, amount, raw_unit) = resolve_line(line);

            if name.trim().is_empty() {
                push_warning(&mut warnings, &recipe.id, "", "ingredient line has no name");
                continue;
            }

            let parsed = match parse_line_amount(amount.as_ref()) {
                Ok(parsed) => parsed,
                Err(source) => {
                    on_invalid(&mut warnings, &recipe.id, &name, source)?;
                    LineAmount {
                        value: 0.0,
                        is_ambiguous: false,
                    }
                }
            };

            let unit = Unit::normalize(&raw_unit);
            if unit.family() == UnitFamily::Unknown {
                tracing::debug!(unit = %unit, ingredient = %name, "Unrecognized unit passed through");
            }

            let normalized_name = normalize_name_with(&name, strip_all_prefixes);

            let group = groups
                .entry((normalized_name, unit))
                .or_insert_with(|| Group {
                    amount: 0.0,
                    original_amount: amount.clone(),
                    original_unit: raw_unit.clone(),
                    recipe_ids: Vec::new(),
                    is_ambiguous: false,
                });

            group.amount += parsed.value;
            group.is_ambiguous |= parsed.is_ambiguous;
            if !group.recipe_ids.contains(&recipe.id) {
                group.recipe_ids.push(recipe.id.clone());
            }
        }
    }

    let mut items: Vec<ShoppingListItem> = groups
        .into_iter()
        .map(|((normalized_name, unit), group)| build_item(normalized_name, unit, group))
        .collect();

    items.sort_by(|a, b| {
        a.category
            .as_ref()
            .cmp(b.category.as_ref())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.unit.as_str().cmp(b.unit.as_str()))
            .then_with(|| a.normalized_name.cmp(&b.normalized_name))
    });

    tracing::info!(
        items = items.len(),
        warnings = warnings.len(),
        "Shopping list generated"
    );

    Ok(ShoppingList { items, warnings })
}

/// Name, amount and raw unit of a line, falling back to its free text
fn resolve_line(line: &IngredientLine) -> (String, Option<Amount>, String) {
    let mut name = line.name.trim().to_string();
    let mut amount = line.amount.clone();
    let mut unit = line.unit.trim().to_string();

    if let Some(raw) = line.raw_text.as_deref().filter(|_| name.is_empty()) {
        let parts = split_raw_line(raw);
        name = parts.name;
        if amount.is_none() {
            amount = parts.quantity.map(Amount::Text);
        }
        if unit.is_empty() {
            unit = parts.unit;
        }
    }

    (name, amount, unit)
}

fn parse_line_amount(amount: Option<&Amount>) -> Result<LineAmount, QuantityError> {
    match amount {
        None => Ok(LineAmount {
            value: 0.0,
            is_ambiguous: false,
        }),
        Some(Amount::Number(value)) if !value.is_finite() => {
            Err(QuantityError::Invalid(value.to_string()))
        }
        Some(Amount::Number(value)) if *value < 0.0 => {
            Err(QuantityError::Negative(value.to_string()))
        }
        Some(Amount::Number(value)) => Ok(LineAmount {
            value: *value,
            is_ambiguous: false,
        }),
        Some(Amount::Text(text)) if is_ambiguous_quantity(text) => Ok(LineAmount {
            value: 0.0,
            is_ambiguous: true,
        }),
        Some(Amount::Text(text)) => parse_quantity(text).map(|value| LineAmount {
            value,
            is_ambiguous: false,
        }),
    }
}

fn push_warning(
    warnings: &mut Vec<AggregationWarning>,
    recipe_id: &RecipeId,
    ingredient: &str,
    message: &str,
) {
    tracing::warn!(recipe_id = %recipe_id, ingredient, message, "Ingredient line degraded");
    warnings.push(AggregationWarning {
        recipe_id: recipe_id.clone(),
        ingredient: ingredient.to_string(),
        message: message.to_string(),
    });
}

/// Standardize, format and categorize a finished group
fn build_item(normalized_name: String, unit: Unit, group: Group) -> ShoppingListItem {
    // Standardize the summed total, not line by line
    let standard = standardize(group.amount, &unit, &normalized_name);
    let name = title_case(&normalized_name);
    let category = CategorizationService::categorize(&normalized_name);

    tracing::debug!(
        ingredient = %normalized_name,
        unit = %unit,
        amount = group.amount,
        recipes = group.recipe_ids.len(),
        "Aggregated ingredient group"
    );

    ShoppingListItem {
        id: item_id(&normalized_name, &unit),
        formatted_amount: format_quantity(group.amount, &unit),
        display_text: format_display_text(group.amount, &unit, &name),
        standardized_display: format_measurement(standard.amount, &standard.unit),
        standardized_amount: standard.amount,
        standardized_unit: standard.unit,
        name,
        normalized_name,
        category,
        amount: group.amount,
        unit,
        original_amount: group.original_amount,
        original_unit: group.original_unit,
        recipe_ids: group.recipe_ids,
        checked: false,
        is_ambiguous: group.is_ambiguous,
    }
}

/// Stable id for an aggregation key
pub fn item_id(normalized_name: &str, unit: &Unit) -> String {
    let key = format!("{}\u{1f}{}", normalized_name, unit);
    Uuid::new_v5(&ITEM_ID_NAMESPACE, key.as_bytes()).to_string()
}
