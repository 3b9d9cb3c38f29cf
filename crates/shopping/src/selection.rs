use crate::aggregation::{AggregationOptions, IngredientAggregationService};
use crate::error::ShoppingListError;
use crate::list::ShoppingList;
use crate::recipe::{Recipe, RecipeId};

/// The recipes currently picked for a shopping trip, plus the last list
/// generated from them
///
/// Every call to [`RecipeSelection::generate`] rebuilds the list from
/// scratch. Items whose last contributing recipe was deselected therefore
/// disappear on the next run.
#[derive(Debug, Clone)]
pub struct RecipeSelection {
    recipes: Vec<Recipe>,
    options: AggregationOptions,
    preserve_checked: bool,
    current: ShoppingList,
}

impl Default for RecipeSelection {
    fn default() -> Self {
        Self::new(AggregationOptions::default(), true)
    }
}

impl RecipeSelection {
    pub fn new(options: AggregationOptions, preserve_checked: bool) -> Self {
        Self {
            recipes: Vec::new(),
            options,
            preserve_checked,
            current: ShoppingList::default(),
        }
    }

    /// Add a recipe, replacing any selected recipe with the same id in place
    pub fn select(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
    }

    pub fn deselect(&mut self, id: &RecipeId) -> Result<Recipe, ShoppingListError> {
        let position = self
            .recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| ShoppingListError::RecipeNotFound(id.to_string()))?;

        Ok(self.recipes.remove(position))
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|r| &r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The list produced by the last successful `generate`
    pub fn current(&self) -> &ShoppingList {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut ShoppingList {
        &mut self.current
    }

    /// Re-aggregate the selection, carrying `checked` forward by item id
    #[tracing::instrument(skip_all, fields(recipes = self.recipes.len()))]
    pub fn generate(&mut self) -> Result<&ShoppingList, ShoppingListError> {
        let mut list = IngredientAggregationService::aggregate(&self.recipes, &self.options)?;

        if self.preserve_checked {
            list.carry_checked_from(&self.current);
        }

        self.current = list;
        Ok(&self.current)
    }
}
