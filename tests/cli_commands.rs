//! Tests for CLI commands (generate, standardize, categorize)

use std::path::PathBuf;
use std::process::Command;

use shoplist::cli::{generate, ingredient, OutputFormat};
use shoplist::Config;
use temp_dir::TempDir;

const RECIPES: &str = r#"[
    {
        "id": 1,
        "title": "Pancakes",
        "extendedIngredients": [
            {"name": "flour", "amount": 1, "unit": "cup"},
            {"name": "eggs", "amount": 2, "unit": ""}
        ]
    },
    {
        "id": 2,
        "title": "Crepes",
        "ingredients": [
            {"name": "flour", "amount": "1", "unit": "cups"}
        ]
    }
]"#;

fn write_recipes(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.child("recipes.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_generate_text() {
    let dir = TempDir::new().unwrap();
    let path = write_recipes(&dir, RECIPES);

    let output = generate::generate(&Config::default(), &path, OutputFormat::Text, false).unwrap();

    assert_eq!(
        output,
        "\
Baking & Spices (1)
- [ ] 2 cup Flour (251 g)

Dairy (1)
- [ ] 2 Eggs (2)
"
    );
}

#[test]
fn test_generate_json() {
    let dir = TempDir::new().unwrap();
    let path = write_recipes(&dir, RECIPES);

    let output = generate::generate(&Config::default(), &path, OutputFormat::Json, false).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["totalCount"], 2);
    assert_eq!(json["checkedCount"], 0);
    assert_eq!(json["categories"]["Baking & Spices"], 1);
    assert_eq!(json["categories"]["Dairy"], 1);
    assert_eq!(json["items"][0]["name"], "Flour");
    assert_eq!(json["items"][0]["standardizedDisplay"], "251 g");
    assert_eq!(json["items"][0]["recipeIds"], serde_json::json!([1, 2]));
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn test_generate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_recipes(
        &dir,
        r#"[{"id": 1, "ingredients": [{"name": "flour", "amount": "lots", "unit": "cup"}]}]"#,
    );

    let output = generate::generate(&Config::default(), &path, OutputFormat::Text, false).unwrap();

    assert!(output.starts_with("Baking & Spices (1)\n"));
    assert!(output.ends_with(
        "Warnings (1)\n- recipe 1: 'flour': Invalid number format: lots\n"
    ));
}

#[test]
fn test_generate_strict_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_recipes(
        &dir,
        r#"[{"id": 1, "ingredients": [{"name": "flour", "amount": "lots", "unit": "cup"}]}]"#,
    );

    let err = generate::generate(&Config::default(), &path, OutputFormat::Text, true).unwrap_err();

    assert!(err.to_string().contains("'flour'"));
}

#[test]
fn test_generate_empty_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let path = write_recipes(&dir, "[]");

    let output = generate::generate(&Config::default(), &path, OutputFormat::Text, false).unwrap();
    assert_eq!(output, "Shopping list is empty\n");

    let missing = dir.child("missing.json");
    let err =
        generate::generate(&Config::default(), &missing, OutputFormat::Text, false).unwrap_err();
    assert!(err.to_string().contains("Failed to read recipes"));
}

#[test]
fn test_standardize_command() {
    assert_eq!(
        ingredient::standardize("2", "cups", "flour", OutputFormat::Text).unwrap(),
        "2 cup flour = 251 g\n"
    );
    assert_eq!(
        ingredient::standardize("1", "lb", "ground beef", OutputFormat::Text).unwrap(),
        "1 lb ground beef = 454 g\n"
    );
    assert!(ingredient::standardize("abc", "cup", "flour", OutputFormat::Text).is_err());

    let output = ingredient::standardize("3", "tbsp", "olive oil", OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["standardizedUnit"], "ml");
    assert_eq!(json["standardizedDisplay"], "44 ml");
}

#[test]
fn test_categorize_command() {
    assert_eq!(
        ingredient::categorize_ingredient("Chicken Breast", OutputFormat::Text).unwrap(),
        "Meat\n"
    );

    let output = ingredient::categorize_ingredient("frozen peas", OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["normalizedName"], "peas");
    assert_eq!(json["category"], "Produce");
}

#[test]
fn test_binary_categorize() {
    let output = Command::new(env!("CARGO_BIN_EXE_shoplist"))
        .args(["categorize", "chicken", "breast"])
        .output()
        .expect("Failed to run shoplist categorize");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Meat\n");
}
