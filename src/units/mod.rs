// Measurement formatting: SI telemetry readings to imperial display strings

pub mod convert;
pub mod detector;
pub mod error;
pub mod fixed;

pub use convert::{
    distance_to_feet, distance_to_miles, speed_to_imperial, BaseUnit, Conversion,
    FormattingRequest, DEFAULT_PRECISION, METERS_PER_MILE, METERS_TO_FEET, MPS_TO_MPH,
};
pub use detector::{looks_like_quantity, parse_quantity};
pub use error::UnitError;
pub use fixed::{to_fixed, MAX_PRECISION};
