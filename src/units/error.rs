use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Reading was NaN or infinite
    InvalidInput(f64),
    /// More decimal places than the formatter supports
    PrecisionOutOfRange(usize),
    /// Text could not be read as a quantity
    ParseError(String),
    /// Quantity carried a unit other than the expected base unit
    UnitMismatch { expected: String, found: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidInput(value) => {
                write!(f, "Invalid input: {} is not a finite number", value)
            }
            UnitError::PrecisionOutOfRange(precision) => write!(
                f,
                "Precision out of range: {} (maximum is {})",
                precision,
                crate::units::fixed::MAX_PRECISION
            ),
            UnitError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            UnitError::UnitMismatch { expected, found } => {
                write!(f, "Unit mismatch: expected '{}', found '{}'", expected, found)
            }
        }
    }
}

impl std::error::Error for UnitError {}
