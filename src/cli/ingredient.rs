use anyhow::{Context, Result};
use serde::Serialize;
use shoplist_shopping::format::format_measurement;
use shoplist_shopping::{
    categorize, normalize_name, parse_quantity, standardize as standardize_measurement, Category,
    Unit,
};

use super::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StandardizeOutput {
    name: String,
    amount: f64,
    unit: Unit,
    standardized_amount: f64,
    standardized_unit: Unit,
    standardized_display: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorizeOutput {
    name: String,
    normalized_name: String,
    category: Category,
}

/// Convert one measurement into its standard unit
pub fn standardize(amount: &str, unit: &str, name: &str, format: OutputFormat) -> Result<String> {
    let value =
        parse_quantity(amount).with_context(|| format!("Invalid amount '{}'", amount))?;
    let unit = Unit::normalize(unit);
    let name = name.trim().to_string();
    let standard = standardize_measurement(value, &unit, &normalize_name(&name));
    let standardized_display = format_measurement(standard.amount, &standard.unit);

    match format {
        OutputFormat::Text => Ok(format!(
            "{} {} = {}\n",
            format_measurement(value, &unit),
            name,
            standardized_display
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&StandardizeOutput {
            name,
            amount: value,
            unit,
            standardized_amount: standard.amount,
            standardized_unit: standard.unit,
            standardized_display,
        })? + "\n"),
    }
}

/// Report the grocery category of an ingredient
pub fn categorize_ingredient(name: &str, format: OutputFormat) -> Result<String> {
    let normalized_name = normalize_name(name);
    let category = categorize(&normalized_name);

    match format {
        OutputFormat::Text => Ok(format!("{}\n", category)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CategorizeOutput {
            name: name.trim().to_string(),
            normalized_name,
            category,
        })? + "\n"),
    }
}
