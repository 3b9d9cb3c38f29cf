use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shoplist_shopping::{
    parse_recipes, AggregationWarning, ListSummary, RecipeSelection, ShoppingList,
    ShoppingListItem,
};

use super::OutputFormat;
use crate::config::Config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOutput<'a> {
    items: &'a [ShoppingListItem],
    warnings: &'a [AggregationWarning],
    #[serde(flatten)]
    summary: ListSummary,
}

/// Build the shopping list for every recipe in a JSON file
///
/// `strict` forces strict quantity parsing on top of the configuration.
#[tracing::instrument(skip(config))]
pub fn generate(
    config: &Config,
    recipes_path: &Path,
    format: OutputFormat,
    strict: bool,
) -> Result<String> {
    let json = std::fs::read_to_string(recipes_path)
        .with_context(|| format!("Failed to read recipes from {}", recipes_path.display()))?;
    let recipes = parse_recipes(&json)
        .with_context(|| format!("Failed to parse recipes in {}", recipes_path.display()))?;

    let mut options = config.aggregation.options();
    options.strict_quantities |= strict;

    let mut selection = RecipeSelection::new(options, config.aggregation.preserve_checked);
    for recipe in recipes {
        if selection.contains(&recipe.id) {
            tracing::warn!(recipe_id = %recipe.id, "Duplicate recipe id, keeping the last one");
        }
        selection.select(recipe);
    }

    let list = selection.generate()?;

    match format {
        OutputFormat::Text => Ok(render_text(list)),
        OutputFormat::Json => {
            let output = GenerateOutput {
                items: &list.items,
                warnings: &list.warnings,
                summary: list.summary(),
            };
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
    }
}

fn render_text(list: &ShoppingList) -> String {
    if list.is_empty() && list.warnings.is_empty() {
        return "Shopping list is empty\n".to_string();
    }

    let mut out = list.render_text();

    if !list.warnings.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "Warnings ({})", list.warnings.len());
        for warning in &list.warnings {
            let _ = writeln!(out, "- {}", warning);
        }
    }

    out
}
