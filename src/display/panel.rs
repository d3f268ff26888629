use crate::display::config::{DisplayConfig, UnitSystem};
use crate::telemetry::models::LocationUpdate;
use crate::units::{to_fixed, Conversion, FormattingRequest, UnitError};
use serde::Serialize;
use std::fmt;

/// One labelled row of the details panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayField {
    pub label: String,
    // None when the device sent no reading; the row is still shown
    pub value: Option<String>,
}

impl DisplayField {
    fn new(label: &str, value: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// The device details shown next to the map, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DetailsPanel {
    pub fields: Vec<DisplayField>,
}

impl DetailsPanel {
    /// Render every panel field for one location update.
    /// A non-finite reading fails the whole panel with [`UnitError::InvalidInput`].
    pub fn build(update: &LocationUpdate, config: &DisplayConfig) -> Result<Self, UnitError> {
        let props = &update.properties;
        let precision = &config.precision;

        log::debug!(
            "building details panel for device {:?} ({:?} units)",
            props.device_id,
            config.units
        );

        let battery = props
            .battery_level
            .map(|level| to_fixed(level * 100.0, precision.battery))
            .transpose()?;
        let motion = props.motion.as_ref().map(|m| m.join(", "));
        let latitude = update
            .latitude()
            .map(|lat| to_fixed(lat, precision.coordinates))
            .transpose()?;
        let longitude = update
            .longitude()
            .map(|lon| to_fixed(lon, precision.coordinates))
            .transpose()?;

        let fields = vec![
            DisplayField::new("Device", props.device_id.clone()),
            DisplayField::new("Battery (%)", battery),
            DisplayField::new("Battery State", props.battery_state.clone()),
            DisplayField::new("WiFi", props.wifi.clone()),
            DisplayField::new("Time", props.timestamp.clone()),
            DisplayField::new(
                "Speed",
                measured(props.speed, Conversion::SpeedToImperial, precision.speed, config)?,
            ),
            DisplayField::new("Motion", motion),
            DisplayField::new(
                "Altitude",
                measured(props.altitude, Conversion::DistanceToFeet, precision.altitude, config)?,
            ),
            DisplayField::new(
                "Vertical Accuracy",
                measured(
                    props.vertical_accuracy,
                    Conversion::DistanceToFeet,
                    precision.accuracy,
                    config,
                )?,
            ),
            DisplayField::new(
                "Horizontal Accuracy",
                measured(
                    props.horizontal_accuracy,
                    Conversion::DistanceToFeet,
                    precision.accuracy,
                    config,
                )?,
            ),
            DisplayField::new(
                "Distance",
                measured(props.distance, Conversion::DistanceToMiles, precision.distance, config)?,
            ),
            DisplayField::new("Latitude", latitude),
            DisplayField::new("Longitude", longitude),
        ];

        Ok(Self { fields })
    }

    pub fn get(&self, label: &str) -> Option<&DisplayField> {
        self.fields.iter().find(|field| field.label == label)
    }

    /// Rendered value of a field, None if the field is unknown or has no reading
    pub fn value(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(|field| field.value.as_deref())
    }
}

/// Format an SI reading with its unit suffix, converting it for imperial display
fn measured(
    reading: Option<f64>,
    conversion: Conversion,
    precision: usize,
    config: &DisplayConfig,
) -> Result<Option<String>, UnitError> {
    let request = FormattingRequest::new(reading).with_precision(precision);
    let base_symbol = conversion.base_unit().symbol();

    match config.units {
        UnitSystem::Imperial => {
            let converted = match request.format(conversion)? {
                Some(converted) => converted,
                None => return Ok(None),
            };
            let mut text = format!("{} {}", converted, conversion.target_symbol());
            if let (true, Some(raw)) = (config.show_raw, reading) {
                text.push_str(&format!(" ({} {})", raw, base_symbol));
            }
            Ok(Some(text))
        }
        UnitSystem::Metric => Ok(request
            .format_plain()?
            .map(|value| format!("{} {}", value, base_symbol))),
    }
}

impl fmt::Display for DetailsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            match &field.value {
                Some(value) => writeln!(f, "{}: {}", field.label, value)?,
                None => writeln!(f, "{}:", field.label)?,
            }
        }
        Ok(())
    }
}
