use fraction::Fraction;

use crate::error::QuantityError;

/// Parse a quantity string into a number
///
/// Supports formats:
/// - Whole numbers: "2" → 2.0
/// - Decimals: "0.5" → 0.5
/// - Pure fractions: "1/2" → 0.5
/// - Mixed fractions: "1 1/2" → 1.5
///
/// # Returns
/// * Ok(f64) - Parsed, finite, non-negative quantity
/// * Err(QuantityError) - Empty, malformed, negative or zero-denominator input
pub fn parse_quantity(quantity_str: &str) -> Result<f64, QuantityError> {
    let trimmed = quantity_str.trim();

    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    // Decimals and whole numbers
    if let Ok(value) = trimmed.parse::<f64>() {
        if !value.is_finite() {
            return Err(QuantityError::Invalid(quantity_str.to_string()));
        }
        if value < 0.0 {
            return Err(QuantityError::Negative(quantity_str.to_string()));
        }
        return Ok(value);
    }

    // Mixed fractions: "1 1/2"
    if trimmed.contains(' ') && trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(QuantityError::Invalid(quantity_str.to_string()));
        }

        let whole = parse_integer(parts[0], quantity_str)?;
        let fractional = parse_fraction(parts[1], quantity_str)?;
        return Ok(whole as f64 + fractional);
    }

    // Pure fractions: "1/2"
    if trimmed.contains('/') {
        return parse_fraction(trimmed, quantity_str);
    }

    Err(QuantityError::Invalid(quantity_str.to_string()))
}

/// Permissive variant of [`parse_quantity`]: anything unparseable counts as zero
pub fn parse_quantity_lenient(quantity_str: &str) -> f64 {
    parse_quantity(quantity_str).unwrap_or(0.0)
}

fn parse_integer(part: &str, original: &str) -> Result<i64, QuantityError> {
    let value: i64 = part
        .parse()
        .map_err(|_| QuantityError::Invalid(original.to_string()))?;

    if value < 0 {
        return Err(QuantityError::Negative(original.to_string()));
    }

    Ok(value)
}

fn parse_fraction(part: &str, original: &str) -> Result<f64, QuantityError> {
    let Some((numerator, denominator)) = part.split_once('/') else {
        return Err(QuantityError::Invalid(original.to_string()));
    };

    let numerator = parse_integer(numerator.trim(), original)?;
    let denominator = parse_integer(denominator.trim(), original)?;

    if denominator == 0 {
        return Err(QuantityError::ZeroDenominator(original.to_string()));
    }

    Ok(numerator as f64 / denominator as f64)
}

/// Round a quantity to a practical cooking value
///
/// Rounding rules:
/// - < 1: Round to nearest 1/4, 1/3, 1/2
/// - 1-10: Round to nearest 1/2
/// - > 10: Round to nearest whole number
pub fn round_to_practical_value(value: f64) -> Fraction {
    let value = value.max(0.0);

    if value < 1.0 {
        let quarters_count = (value * 4.0).round() as u64;
        let thirds_count = (value * 3.0).round() as u64;
        let halves_count = (value * 2.0).round() as u64;

        let diff_quarters = (value - quarters_count as f64 / 4.0).abs();
        let diff_thirds = (value - thirds_count as f64 / 3.0).abs();
        let diff_halves = (value - halves_count as f64 / 2.0).abs();

        if diff_quarters <= diff_thirds && diff_quarters <= diff_halves {
            Fraction::new(quarters_count, 4u64)
        } else if diff_thirds <= diff_halves {
            Fraction::new(thirds_count, 3u64)
        } else {
            Fraction::new(halves_count, 2u64)
        }
    } else if value < 10.0 {
        let halves_count = (value * 2.0).round() as u64;
        Fraction::new(halves_count, 2u64)
    } else {
        Fraction::new(value.round() as u64, 1u64)
    }
}

/// Format a Fraction as a human-readable string
///
/// - Whole numbers: 2/1 → "2"
/// - Mixed fractions: 3/2 → "1 1/2"
/// - Pure fractions: 1/2 → "1/2"
pub fn format_fraction(fraction: Fraction) -> String {
    let (Some(&numer), Some(&denom)) = (fraction.numer(), fraction.denom()) else {
        return "0".to_string();
    };

    if denom == 1 {
        return numer.to_string();
    }

    if numer >= denom {
        let whole = numer / denom;
        let remainder = numer % denom;

        if remainder == 0 {
            whole.to_string()
        } else {
            format!("{} {}/{}", whole, remainder, denom)
        }
    } else {
        format!("{}/{}", numer, denom)
    }
}
