use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShoppingListError;

/// Recipe identifier as handed over by the recipe provider (numeric or text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(id) => write!(f, "{id}"),
            RecipeId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        RecipeId::Number(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::Text(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        RecipeId::Text(id)
    }
}

/// Raw quantity of an ingredient line: a number or text such as "1 1/2"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{value}"),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Amount::Text(text.to_string())
    }
}

/// One raw ingredient requirement from one recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    /// Free text such as "2 cups chopped onion"
    #[serde(default, alias = "original", skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub unit: String,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, amount: impl Into<Amount>, unit: impl Into<String>) -> Self {
        Self {
            raw_text: None,
            name: name.into(),
            amount: Some(amount.into()),
            unit: unit.into(),
        }
    }

    /// A line known only by its free text; quantity, unit and name are
    /// recovered at aggregation time
    pub fn from_text(raw: impl Into<String>) -> Self {
        Self {
            raw_text: Some(raw.into()),
            ..Self::default()
        }
    }
}

/// A recipe as seen by the aggregation engine: an id and its ingredient lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "extendedIngredients")]
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    pub fn new(id: impl Into<RecipeId>, ingredients: Vec<IngredientLine>) -> Self {
        Self {
            id: id.into(),
            title: None,
            ingredients,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Parse a JSON array of recipes
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, ShoppingListError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_shape() {
        let json = r#"[
            {
                "id": 123,
                "title": "Chocolate Cake",
                "servings": 8,
                "extendedIngredients": [
                    {"name": "all-purpose flour", "amount": 2, "unit": "cups"},
                    {"name": "eggs", "amount": "1 1/2", "unit": ""},
                    {"original": "a pinch of salt"}
                ]
            },
            {"id": "abc", "ingredients": []}
        ]"#;

        let recipes = parse_recipes(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, RecipeId::Number(123));
        assert_eq!(recipes[0].ingredients[0].amount, Some(Amount::Number(2.0)));
        assert_eq!(
            recipes[0].ingredients[1].amount,
            Some(Amount::Text("1 1/2".to_string()))
        );
        assert_eq!(
            recipes[0].ingredients[2].raw_text.as_deref(),
            Some("a pinch of salt")
        );
        assert_eq!(recipes[1].id, RecipeId::Text("abc".to_string()));
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_recipes("{not json"),
            Err(ShoppingListError::Json(_))
        ));
    }

    #[test]
    fn test_recipe_id_display() {
        assert_eq!(RecipeId::from(42).to_string(), "42");
        assert_eq!(RecipeId::from("r-1").to_string(), "r-1");
    }
}
