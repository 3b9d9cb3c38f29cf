use crate::quantity::{format_fraction, round_to_practical_value};
use crate::units::Unit;

/// Format a quantity for display in the given unit
///
/// - counts: whole numbers, or one decimal place when fractional
/// - grams and millilitres: whole numbers from 10 up, otherwise at most two
///   decimals
/// - kitchen units (tsp, tbsp, cup, liter, oz, lb, kg): practical fractions
///   such as "1 1/2"
/// - unrecognised units: at most two decimals below 10, one above
pub fn format_quantity(amount: f64, unit: &Unit) -> String {
    match unit {
        Unit::Count => {
            if amount.fract() == 0.0 {
                format!("{amount:.0}")
            } else {
                format!("{amount:.1}")
            }
        }
        Unit::G | Unit::Ml => {
            if amount >= 10.0 {
                format!("{:.0}", amount.round())
            } else {
                trim_decimals(amount, 2)
            }
        }
        Unit::Tsp | Unit::Tbsp | Unit::Cup | Unit::Liter | Unit::Oz | Unit::Lb | Unit::Kg => {
            let rounded = round_to_practical_value(amount);
            let is_zero = rounded.numer().is_none_or(|numer| *numer == 0);
            if is_zero && amount > 0.0 {
                trim_decimals(amount, 2)
            } else {
                format_fraction(rounded)
            }
        }
        Unit::Other(_) => {
            if amount < 10.0 {
                trim_decimals(amount, 2)
            } else {
                trim_decimals(amount, 1)
            }
        }
    }
}

/// "<amount> <unit>", or just the amount for a bare count
pub fn format_measurement(amount: f64, unit: &Unit) -> String {
    let quantity = format_quantity(amount, unit);
    match unit {
        Unit::Count => quantity,
        _ => format!("{} {}", quantity, unit),
    }
}

/// "<amount> <unit> <name>", leaving the unit out for a bare count
pub fn format_display_text(amount: f64, unit: &Unit, name: &str) -> String {
    format!("{} {}", format_measurement(amount, unit), name)
}

fn trim_decimals(amount: f64, places: usize) -> String {
    let formatted = format!("{amount:.places$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_rounds_to_whole_numbers() {
        assert_eq!(format_measurement(453.59, &Unit::G), "454 g");
        assert_eq!(format_measurement(29.58, &Unit::Ml), "30 ml");
        assert_eq!(format_measurement(4.93, &Unit::Ml), "4.93 ml");
        assert_eq!(format_measurement(2.5, &Unit::G), "2.5 g");
    }

    #[test]
    fn test_kitchen_units_use_fractions() {
        assert_eq!(format_measurement(1.5, &Unit::Cup), "1 1/2 cup");
        assert_eq!(format_measurement(0.75, &Unit::Tbsp), "3/4 tbsp");
        assert_eq!(format_measurement(2.0, &Unit::Lb), "2 lb");
        assert_eq!(format_measurement(0.1, &Unit::Tsp), "0.1 tsp");
    }

    #[test]
    fn test_counts() {
        assert_eq!(format_measurement(3.0, &Unit::Count), "3");
        assert_eq!(format_measurement(1.5, &Unit::Count), "1.5");
        assert_eq!(format_display_text(2.0, &Unit::Count, "Eggs"), "2 Eggs");
    }

    #[test]
    fn test_unknown_units() {
        let cloves = Unit::Other("cloves".to_string());
        assert_eq!(format_measurement(4.0, &cloves), "4 cloves");
        assert_eq!(format_measurement(12.34, &cloves), "12.3 cloves");
        assert_eq!(format_display_text(1.0, &cloves, "Garlic"), "1 cloves Garlic");
    }
}
