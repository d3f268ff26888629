use crate::units::error::UnitError;

/// Largest precision accepted, the same limit `Number.prototype.toFixed` enforces
pub const MAX_PRECISION: usize = 100;

/// Format a finite value with exactly `precision` digits after the decimal point.
///
/// Rounds half away from zero on the exact binary value, so `0.5` gives `"1"`
/// while `1.005` (stored as 1.00499999...) gives `"1.00"`. A minus sign is
/// printed only for strictly negative input, which keeps `-0.0` as `"0"` but
/// `-0.04` at precision 1 as `"-0.0"`.
pub fn to_fixed(value: f64, precision: usize) -> Result<String, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::InvalidInput(value));
    }
    if precision > MAX_PRECISION {
        return Err(UnitError::PrecisionOutOfRange(precision));
    }

    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    // A binary fraction's decimal expansion always ends in 5, so the value sits
    // exactly halfway between two candidates iff it has one digit more than kept.
    // Anywhere else std's correctly rounded output is already the nearest one.
    if exact_fraction_digits(magnitude) != precision + 1 {
        return Ok(format!("{}{:.*}", sign, precision, magnitude));
    }

    let exact = format!("{:.*}", precision + 1, magnitude);
    let mut int_len = exact.find('.').unwrap_or(exact.len());
    let mut digits: Vec<u8> = exact.bytes().filter(|&b| b != b'.').collect();
    digits.pop();
    if increment(&mut digits) {
        digits.insert(0, b'1');
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    out.push_str(sign);
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    Ok(out)
}

/// Number of digits after the decimal point in the exact expansion of a finite value
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0.0 {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Add one unit in the last place. Returns true when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_digits() {
        assert_eq!(to_fixed(3.28084, 4).unwrap(), "3.2808");
        assert_eq!(to_fixed(22.3694, 1).unwrap(), "22.4");
        assert_eq!(to_fixed(1.0, 2).unwrap(), "1.00");
        assert_eq!(to_fixed(42.0, 0).unwrap(), "42");
        assert_eq!(to_fixed(0.0, 1).unwrap(), "0.0");
        assert_eq!(to_fixed(0.0, 0).unwrap(), "0");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.5, 0).unwrap(), "1");
        assert_eq!(to_fixed(2.5, 0).unwrap(), "3");
        assert_eq!(to_fixed(-2.5, 0).unwrap(), "-3");
        assert_eq!(to_fixed(0.125, 2).unwrap(), "0.13");
    }

    #[test]
    fn test_rounds_on_exact_binary_value() {
        // 1.005 and 9.995 are stored just below the tie
        assert_eq!(to_fixed(1.005, 2).unwrap(), "1.00");
        assert_eq!(to_fixed(9.995, 2).unwrap(), "9.99");
    }

    #[test]
    fn test_carry_into_new_digit() {
        assert_eq!(to_fixed(99.5, 0).unwrap(), "100");
        assert_eq!(to_fixed(9.96, 1).unwrap(), "10.0");
        assert_eq!(to_fixed(-999.96, 1).unwrap(), "-1000.0");
    }

    #[test]
    fn test_negative_sign_rules() {
        assert_eq!(to_fixed(-0.0, 0).unwrap(), "0");
        assert_eq!(to_fixed(-0.0, 2).unwrap(), "0.00");
        assert_eq!(to_fixed(-0.04, 1).unwrap(), "-0.0");
        assert_eq!(to_fixed(-12.34, 1).unwrap(), "-12.3");
    }

    #[test]
    fn test_large_magnitude_stays_fixed_notation() {
        assert_eq!(to_fixed(1e21, 0).unwrap(), "1000000000000000000000");
        assert_eq!(to_fixed(1e21, 1).unwrap(), "1000000000000000000000.0");
    }

    #[test]
    fn test_precision_beyond_exact_expansion_pads_zeros() {
        let formatted = to_fixed(0.5, MAX_PRECISION).unwrap();
        assert!(formatted.starts_with("0.5000"));
        assert_eq!(formatted.len(), 2 + MAX_PRECISION);
    }

    #[test]
    fn test_precision_above_limit_rejected() {
        assert_eq!(
            to_fixed(1.0, MAX_PRECISION + 1),
            Err(UnitError::PrecisionOutOfRange(MAX_PRECISION + 1))
        );
        assert_eq!(
            to_fixed(1.0, usize::MAX),
            Err(UnitError::PrecisionOutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_exact_fraction_digits() {
        assert_eq!(exact_fraction_digits(0.0), 0);
        assert_eq!(exact_fraction_digits(42.0), 0);
        assert_eq!(exact_fraction_digits(1e300), 0);
        assert_eq!(exact_fraction_digits(0.5), 1);
        assert_eq!(exact_fraction_digits(2.5), 1);
        assert_eq!(exact_fraction_digits(0.125), 3);
        assert_eq!(exact_fraction_digits(f64::from_bits(1)), 1074);
    }

    #[test]
    fn test_subnormal_values() {
        assert_eq!(to_fixed(f64::from_bits(1), 2).unwrap(), "0.00");
        assert_eq!(to_fixed(-f64::from_bits(1), 0).unwrap(), "-0");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(to_fixed(f64::NAN, 2), Err(UnitError::InvalidInput(v)) if v.is_nan()));
        assert_eq!(
            to_fixed(f64::INFINITY, 0),
            Err(UnitError::InvalidInput(f64::INFINITY))
        );
        assert_eq!(
            to_fixed(f64::NEG_INFINITY, 0),
            Err(UnitError::InvalidInput(f64::NEG_INFINITY))
        );
    }
}
