use serde::{Deserialize, Serialize};

use crate::density::{density_of, is_liquid};
use crate::units::{SMALL_VOLUME_ML, Unit, UnitFamily};

/// An amount expressed in its standard unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardMeasurement {
    pub amount: f64,
    pub unit: Unit,
}

/// Pick the standard unit for an ingredient measured in `unit`
///
/// - solids already weighed stay in the weight family, as grams
/// - liquids already measured by volume stay in millilitres for small units
///   (under 50 ml each) and move to cups for larger ones
/// - anything else goes to millilitres for liquids and grams for solids
/// - counts and unrecognised units have no family to convert within and are
///   returned unchanged
pub fn standard_unit(unit: &Unit, ingredient_name: &str) -> Unit {
    let liquid = is_liquid(ingredient_name);

    match unit.family() {
        UnitFamily::Count | UnitFamily::Unknown => unit.clone(),
        UnitFamily::Weight if !liquid => Unit::G,
        UnitFamily::Volume if liquid => match unit.ml_factor() {
            Some(ml) if ml < SMALL_VOLUME_ML => Unit::Ml,
            _ => Unit::Cup,
        },
        _ if liquid => Unit::Ml,
        _ => Unit::G,
    }
}

/// Convert `amount` from one unit into another
///
/// Same-family conversions use the fixed scalar factors; volume ↔ weight goes
/// through the ingredient's density. Returns `None` when either side is a
/// count or an unrecognised unit and the two units differ.
pub fn convert_amount(amount: f64, from: &Unit, to: &Unit, ingredient_name: &str) -> Option<f64> {
    if from == to {
        return Some(amount);
    }

    match (from.family(), to.family()) {
        (UnitFamily::Volume, UnitFamily::Volume) => {
            Some(amount * from.ml_factor()? / to.ml_factor()?)
        }
        (UnitFamily::Weight, UnitFamily::Weight) => {
            Some(amount * from.gram_factor()? / to.gram_factor()?)
        }
        (UnitFamily::Volume, UnitFamily::Weight) => {
            let grams = amount * from.ml_factor()? * density_of(ingredient_name);
            Some(grams / to.gram_factor()?)
        }
        (UnitFamily::Weight, UnitFamily::Volume) => {
            let ml = amount * from.gram_factor()? / density_of(ingredient_name);
            Some(ml / to.ml_factor()?)
        }
        _ => None,
    }
}

/// Convert an amount into the ingredient's standard unit
///
/// No rounding happens here; display formatting rounds later.
pub fn standardize(amount: f64, unit: &Unit, ingredient_name: &str) -> StandardMeasurement {
    let target = standard_unit(unit, ingredient_name);

    match convert_amount(amount, unit, &target, ingredient_name) {
        Some(converted) => StandardMeasurement {
            amount: converted,
            unit: target,
        },
        None => StandardMeasurement {
            amount,
            unit: unit.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs() * tolerance,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn test_solid_by_volume_goes_to_grams_via_density() {
        let result = standardize(2.0, &Unit::Cup, "flour");
        assert_eq!(result.unit, Unit::G);
        // 2 × 236.59 ml × 0.53 g/ml
        assert_close(result.amount, 250.79, 0.01);
    }

    #[test]
    fn test_solid_by_weight_becomes_grams() {
        let result = standardize(1.0, &Unit::Lb, "chicken breast");
        assert_eq!(result.unit, Unit::G);
        assert_close(result.amount, 453.59, 0.0001);

        let result = standardize(250.0, &Unit::G, "cheddar");
        assert_eq!(result.unit, Unit::G);
        assert_eq!(result.amount, 250.0);
    }

    #[test]
    fn test_liquid_small_volume_goes_to_ml() {
        let result = standardize(2.0, &Unit::Tbsp, "olive oil");
        assert_eq!(result.unit, Unit::Ml);
        assert_close(result.amount, 29.58, 0.001);
    }

    #[test]
    fn test_liquid_large_volume_goes_to_cups() {
        let result = standardize(1.0, &Unit::Liter, "milk");
        assert_eq!(result.unit, Unit::Cup);
        assert_close(result.amount, 4.2267, 0.001);

        let result = standardize(1.5, &Unit::Cup, "water");
        assert_eq!(result.unit, Unit::Cup);
        assert_eq!(result.amount, 1.5);
    }

    #[test]
    fn test_liquid_by_weight_goes_to_ml() {
        let result = standardize(100.0, &Unit::G, "honey");
        assert_eq!(result.unit, Unit::Ml);
        assert_close(result.amount, 100.0 / 1.42, 0.001);
    }

    #[test]
    fn test_unknown_density_uses_solid_default() {
        let result = standardize(1.0, &Unit::Cup, "chopped walnuts");
        assert_eq!(result.unit, Unit::G);
        assert_close(result.amount, 236.59 * 0.6, 0.001);
    }

    #[test]
    fn test_counts_and_unknown_units_unchanged() {
        let result = standardize(3.0, &Unit::Count, "eggs");
        assert_eq!(result, StandardMeasurement { amount: 3.0, unit: Unit::Count });

        let cloves = Unit::Other("cloves".to_string());
        let result = standardize(4.0, &cloves, "garlic");
        assert_eq!(result, StandardMeasurement { amount: 4.0, unit: cloves });
    }

    #[test]
    fn test_convert_amount_rejects_cross_count() {
        assert_eq!(convert_amount(1.0, &Unit::Count, &Unit::G, "egg"), None);
        assert_close(
            convert_amount(3.0, &Unit::Tsp, &Unit::Tbsp, "salt").unwrap(),
            1.0,
            0.001,
        );
    }
}
