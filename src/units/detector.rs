use crate::units::convert::BaseUnit;
use crate::units::error::UnitError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional sign, decimal, scientific notation) + optional whitespace + optional unit
    /// Examples: "10", "10 m/s", "1609.344m", "-3.5e2 m"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Z/]+)?$"
    ).unwrap();
}

/// Check if a string looks like a number with an optional unit suffix
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Read a raw reading, optionally suffixed with the expected base unit
pub fn parse_quantity(s: &str, expected: BaseUnit) -> Result<f64, UnitError> {
    let trimmed = s.trim();

    // Bare numbers, including "NaN" and "inf" spellings
    if let Ok(value) = trimmed.parse::<f64>() {
        if !value.is_finite() {
            return Err(UnitError::InvalidInput(value));
        }
        return Ok(value);
    }

    let captures = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::ParseError(format!("'{}' is not a quantity", s)))?;

    let value = captures[1]
        .parse::<f64>()
        .map_err(|e| UnitError::ParseError(format!("'{}': {}", &captures[1], e)))?;

    if let Some(unit) = captures.get(2) {
        if unit.as_str() != expected.symbol() {
            return Err(UnitError::UnitMismatch {
                expected: expected.symbol().to_string(),
                found: unit.as_str().to_string(),
            });
        }
    }

    if !value.is_finite() {
        return Err(UnitError::InvalidInput(value));
    }
    Ok(value)
}
