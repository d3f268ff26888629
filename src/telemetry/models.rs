use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Shown on the map before the first update arrives (San Francisco, CA)
pub const INITIAL_COORDINATES: [f64; 2] = [-122.440629, 37.766945];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    // GeoJSON order: longitude, latitude, then optional altitude
    pub coordinates: Vec<f64>,

    #[serde(rename = "type", default = "default_geometry_type")]
    pub type_: String,
}

fn default_geometry_type() -> String {
    "Point".to_string()
}

/// Readings reported by the device alongside its position.
/// Every field is optional; a device only sends what its sensors have.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocationProperties {
    #[serde(default)]
    pub device_id: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    // Fraction in 0..=1
    #[serde(default)]
    pub battery_level: Option<f64>,

    #[serde(default)]
    pub battery_state: Option<String>,

    #[serde(default)]
    pub wifi: Option<String>,

    // m/s
    #[serde(default)]
    pub speed: Option<f64>,

    #[serde(default)]
    pub motion: Option<Vec<String>>,

    // m
    #[serde(default)]
    pub altitude: Option<f64>,

    // m
    #[serde(default)]
    pub vertical_accuracy: Option<f64>,

    // m
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,

    // Trip distance so far, m
    #[serde(default)]
    pub distance: Option<f64>,

    // Anything else the device sends is kept as-is
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One GeoJSON point feature pushed by the tracking channel
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationUpdate {
    pub geometry: Geometry,

    #[serde(default)]
    pub properties: LocationProperties,

    #[serde(rename = "type", default = "default_feature_type")]
    pub type_: String,
}

fn default_feature_type() -> String {
    "Feature".to_string()
}

impl LocationUpdate {
    /// The location displayed before any update has been received
    pub fn initial() -> Self {
        Self {
            geometry: Geometry {
                coordinates: INITIAL_COORDINATES.to_vec(),
                type_: default_geometry_type(),
            },
            properties: LocationProperties::default(),
            type_: default_feature_type(),
        }
    }

    pub fn longitude(&self) -> Option<f64> {
        self.geometry.coordinates.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.geometry.coordinates.get(1).copied()
    }
}
