use crate::units::error::UnitError;
use crate::units::fixed::{to_fixed, MAX_PRECISION};

/// Meters/second to miles/hour
pub const MPS_TO_MPH: f64 = 2.23694;
/// Meters to feet
pub const METERS_TO_FEET: f64 = 3.28084;
/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Precision used when the caller does not ask for one
pub const DEFAULT_PRECISION: usize = 0;

/// Convert a speed in m/s to mph, formatted to `precision` decimals
pub fn speed_to_imperial(meters_per_second: f64, precision: usize) -> Result<String, UnitError> {
    Conversion::SpeedToImperial.apply(meters_per_second, precision)
}

/// Convert a distance in meters to feet, formatted to `precision` decimals
pub fn distance_to_feet(meters: f64, precision: usize) -> Result<String, UnitError> {
    Conversion::DistanceToFeet.apply(meters, precision)
}

/// Convert a distance in meters to miles, formatted to `precision` decimals
pub fn distance_to_miles(meters: f64, precision: usize) -> Result<String, UnitError> {
    Conversion::DistanceToMiles.apply(meters, precision)
}

/// SI unit a raw telemetry reading arrives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUnit {
    Meters,
    MetersPerSecond,
}

impl BaseUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            BaseUnit::Meters => "m",
            BaseUnit::MetersPerSecond => "m/s",
        }
    }
}

/// One of the fixed SI to imperial conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    SpeedToImperial,
    DistanceToFeet,
    DistanceToMiles,
}

impl Conversion {
    /// Unit the raw reading must be expressed in
    pub fn base_unit(&self) -> BaseUnit {
        match self {
            Conversion::SpeedToImperial => BaseUnit::MetersPerSecond,
            Conversion::DistanceToFeet | Conversion::DistanceToMiles => BaseUnit::Meters,
        }
    }

    /// Suffix of the converted value
    pub fn target_symbol(&self) -> &'static str {
        match self {
            Conversion::SpeedToImperial => "mph",
            Conversion::DistanceToFeet => "ft",
            Conversion::DistanceToMiles => "mi",
        }
    }

    /// Converted value before formatting
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            Conversion::SpeedToImperial => value * MPS_TO_MPH,
            Conversion::DistanceToFeet => value * METERS_TO_FEET,
            Conversion::DistanceToMiles => value / METERS_PER_MILE,
        }
    }

    pub fn apply(&self, value: f64, precision: usize) -> Result<String, UnitError> {
        // Checked before converting so the error reports the caller's reading
        if !value.is_finite() {
            return Err(UnitError::InvalidInput(value));
        }
        let converted = self.convert(value);
        if converted.is_infinite() {
            if precision > MAX_PRECISION {
                return Err(UnitError::PrecisionOutOfRange(precision));
            }
            // Finite reading past f64 range once converted, printed as JS would
            log::debug!("{:?} of {} overflows to {}", self, value, converted);
            let text = if converted > 0.0 { "Infinity" } else { "-Infinity" };
            return Ok(text.to_string());
        }
        to_fixed(converted, precision)
    }
}

/// A reading that may be absent, paired with the precision to show it at
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormattingRequest {
    pub measurement: Option<f64>,
    pub precision: usize,
}

impl FormattingRequest {
    pub fn new(measurement: Option<f64>) -> Self {
        Self {
            measurement,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Run the conversion. An absent reading formats to `None`, never a placeholder.
    pub fn format(&self, conversion: Conversion) -> Result<Option<String>, UnitError> {
        self.measurement
            .map(|value| conversion.apply(value, self.precision))
            .transpose()
    }

    /// Format without converting, for readings already in display units
    pub fn format_plain(&self) -> Result<Option<String>, UnitError> {
        self.measurement
            .map(|value| to_fixed(value, self.precision))
            .transpose()
    }
}
