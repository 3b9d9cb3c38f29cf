use std::fmt;

use serde::{Deserialize, Serialize};

/// Millilitres per unit, shared by every volume conversion
pub const ML_PER_TSP: f64 = 4.93;
pub const ML_PER_TBSP: f64 = 14.79;
pub const ML_PER_CUP: f64 = 236.59;
pub const ML_PER_LITER: f64 = 1000.0;

/// Grams per unit, shared by every weight conversion
pub const G_PER_OZ: f64 = 28.35;
pub const G_PER_LB: f64 = 453.59;
pub const G_PER_KG: f64 = 1000.0;

/// A unit volume below this many millilitres is displayed in millilitres
pub const SMALL_VOLUME_ML: f64 = 50.0;

/// Canonical unit token
///
/// Every raw unit string maps to exactly one variant. Unrecognised units are
/// kept verbatim (lower-cased) in `Other` so identical spellings still group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Unit {
    Tsp,
    Tbsp,
    Cup,
    Ml,
    Liter,
    Oz,
    G,
    Kg,
    Lb,
    /// Bare count ("2 eggs")
    Count,
    Other(String),
}

/// Measurement family a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Volume,
    Weight,
    Count,
    Unknown,
}

impl Unit {
    /// Normalize a raw unit string
    ///
    /// Lower-cases and trims the input (and a trailing period, as in "tbsp."),
    /// then matches it against the synonym table.
    pub fn normalize(raw: &str) -> Unit {
        let normalized = raw.trim().trim_end_matches('.').trim().to_lowercase();

        match normalized.as_str() {
            "tsp" | "tsps" | "teaspoon" | "teaspoons" => Unit::Tsp,
            "tbsp" | "tbsps" | "tbs" | "tbl" | "tablespoon" | "tablespoons" => Unit::Tbsp,
            "cup" | "cups" | "c" => Unit::Cup,
            "ml" | "mls" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Unit::Ml,
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "oz" | "ounce" | "ounces" => Unit::Oz,
            "g" | "gr" | "gram" | "grams" | "gramme" | "grammes" => Unit::G,
            "kg" | "kgs" | "kilogram" | "kilograms" | "kilo" | "kilos" => Unit::Kg,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Lb,
            "" | "whole" | "piece" | "pieces" | "unit" | "units" | "count" | "item" | "items"
            | "each" => Unit::Count,
            other => Unit::Other(other.to_string()),
        }
    }

    /// Canonical token; the empty string for a bare count
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => "cup",
            Unit::Ml => "ml",
            Unit::Liter => "liter",
            Unit::Oz => "oz",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Lb => "lb",
            Unit::Count => "",
            Unit::Other(raw) => raw,
        }
    }

    pub fn family(&self) -> UnitFamily {
        match self {
            Unit::Tsp | Unit::Tbsp | Unit::Cup | Unit::Ml | Unit::Liter => UnitFamily::Volume,
            Unit::Oz | Unit::G | Unit::Kg | Unit::Lb => UnitFamily::Weight,
            Unit::Count => UnitFamily::Count,
            Unit::Other(_) => UnitFamily::Unknown,
        }
    }

    /// Millilitres in one of this unit, for volume units
    pub fn ml_factor(&self) -> Option<f64> {
        match self {
            Unit::Tsp => Some(ML_PER_TSP),
            Unit::Tbsp => Some(ML_PER_TBSP),
            Unit::Cup => Some(ML_PER_CUP),
            Unit::Ml => Some(1.0),
            Unit::Liter => Some(ML_PER_LITER),
            _ => None,
        }
    }

    /// Grams in one of this unit, for weight units
    pub fn gram_factor(&self) -> Option<f64> {
        match self {
            Unit::Oz => Some(G_PER_OZ),
            Unit::G => Some(1.0),
            Unit::Kg => Some(G_PER_KG),
            Unit::Lb => Some(G_PER_LB),
            _ => None,
        }
    }

    pub fn is_volume(&self) -> bool {
        self.family() == UnitFamily::Volume
    }

    pub fn is_weight(&self) -> bool {
        self.family() == UnitFamily::Weight
    }
}

/// Free-function form of [`Unit::normalize`]
pub fn normalize_unit(raw: &str) -> Unit {
    Unit::normalize(raw)
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        Unit::normalize(&raw)
    }
}
