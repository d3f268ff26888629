use crate::units::MAX_PRECISION;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// How the details panel renders readings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub units: UnitSystem,

    // Append the raw SI reading after converted values: "22 mph (10 m/s)"
    #[serde(default = "default_show_raw")]
    pub show_raw: bool,

    #[serde(default)]
    pub precision: PrecisionConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

/// Decimal places per panel field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrecisionConfig {
    #[serde(default, deserialize_with = "bounded_precision")]
    pub speed: usize,

    #[serde(default, deserialize_with = "bounded_precision")]
    pub altitude: usize,

    // Vertical and horizontal accuracy
    #[serde(default, deserialize_with = "bounded_precision")]
    pub accuracy: usize,

    #[serde(
        default = "default_distance_precision",
        deserialize_with = "bounded_precision"
    )]
    pub distance: usize,

    #[serde(
        default = "default_battery_precision",
        deserialize_with = "bounded_precision"
    )]
    pub battery: usize,

    #[serde(
        default = "default_coordinate_precision",
        deserialize_with = "bounded_precision"
    )]
    pub coordinates: usize,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            speed: 0,
            altitude: 0,
            accuracy: 0,
            distance: default_distance_precision(),
            battery: default_battery_precision(),
            coordinates: default_coordinate_precision(),
        }
    }
}

fn bounded_precision<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let precision = usize::deserialize(deserializer)?;
    if precision > MAX_PRECISION {
        return Err(D::Error::custom(format!(
            "precision {} is above the maximum of {}",
            precision, MAX_PRECISION
        )));
    }
    Ok(precision)
}

fn default_show_raw() -> bool {
    true
}

fn default_distance_precision() -> usize {
    2
}

fn default_battery_precision() -> usize {
    2
}

fn default_coordinate_precision() -> usize {
    6
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl DisplayConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: DisplayConfig = toml::from_str(content)?;
        log::debug!("loaded display config: {:?}", config);
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            units: UnitSystem::Imperial,
            show_raw: default_show_raw(),
            precision: PrecisionConfig::default(),
        }
    }
}
