use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::categorization::Category;
use crate::error::ShoppingListError;
use crate::recipe::{Amount, RecipeId};
use crate::units::Unit;

/// Aggregated shopping list item for one (normalized name, unit) key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub normalized_name: String,
    pub category: Category,
    /// Summed amount in `unit`
    pub amount: f64,
    pub unit: Unit,
    pub formatted_amount: String,
    pub display_text: String,
    pub standardized_amount: f64,
    pub standardized_unit: Unit,
    /// e.g. "454 g" for an aggregated "1 lb"
    pub standardized_display: String,
    pub original_amount: Option<Amount>,
    pub original_unit: String,
    pub recipe_ids: Vec<RecipeId>,
    pub checked: bool,
    /// At least one contributing line said "to taste", "a pinch", ...
    pub is_ambiguous: bool,
}

/// A line that degraded to a default instead of failing the whole list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationWarning {
    pub recipe_id: RecipeId,
    pub ingredient: String,
    pub message: String,
}

impl fmt::Display for AggregationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recipe {}: '{}': {}",
            self.recipe_id, self.ingredient, self.message
        )
    }
}

/// Per-category counts plus totals, as shown above a list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub categories: BTreeMap<String, usize>,
    pub total_count: usize,
    pub checked_count: usize,
}

/// Result of one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub warnings: Vec<AggregationWarning>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ShoppingListItem, ShoppingListError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ShoppingListError::ItemNotFound(id.to_string()))
    }

    /// Flip the checked state of an item, returning the new state
    pub fn toggle(&mut self, id: &str) -> Result<bool, ShoppingListError> {
        let item = self.get_mut(id)?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), ShoppingListError> {
        self.get_mut(id)?.checked = checked;
        Ok(())
    }

    /// Uncheck every item for the next shopping trip
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }

    /// Drop checked items, returning how many were removed
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Copy `checked` from a previous list onto items with the same id
    pub fn carry_checked_from(&mut self, previous: &ShoppingList) {
        let checked: HashMap<&str, bool> = previous
            .items
            .iter()
            .map(|item| (item.id.as_str(), item.checked))
            .collect();

        for item in &mut self.items {
            if let Some(was_checked) = checked.get(item.id.as_str()) {
                item.checked = *was_checked;
            }
        }
    }

    pub fn summary(&self) -> ListSummary {
        let mut categories = BTreeMap::new();
        for item in &self.items {
            *categories.entry(item.category.to_string()).or_insert(0) += 1;
        }

        ListSummary {
            categories,
            total_count: self.items.len(),
            checked_count: self.items.iter().filter(|item| item.checked).count(),
        }
    }

    /// Plain-text rendering grouped under "Category (n)" headers
    pub fn render_text(&self) -> String {
        let summary = self.summary();
        let mut out = String::new();
        let mut current: Option<Category> = None;

        for item in &self.items {
            if current != Some(item.category) {
                if current.is_some() {
                    out.push('\n');
                }
                let count = summary
                    .categories
                    .get(item.category.as_ref())
                    .copied()
                    .unwrap_or_default();
                let _ = writeln!(out, "{} ({})", item.category, count);
                current = Some(item.category);
            }

            let mark = if item.checked { "x" } else { " " };
            let _ = writeln!(
                out,
                "- [{}] {} ({})",
                mark, item.display_text, item.standardized_display
            );
        }

        out
    }
}
