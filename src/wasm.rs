// WebAssembly bindings for the browser dashboard
use crate::display::{DetailsPanel, DisplayConfig};
use crate::telemetry::LocationUpdate;
use crate::units;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TrackuWasm {}

impl Default for TrackuWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TrackuWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// m/s -> mph; precision defaults to 0 when omitted
    #[wasm_bindgen]
    pub fn speed_to_imperial(
        &self,
        meters_per_second: f64,
        precision: Option<u32>,
    ) -> Result<String, JsValue> {
        units::speed_to_imperial(meters_per_second, precision_or_default(precision))
            .map_err(|e| JsValue::from_str(&format!("Failed to format speed: {}", e)))
    }

    /// m -> ft; precision defaults to 0 when omitted
    #[wasm_bindgen]
    pub fn distance_to_feet(&self, meters: f64, precision: Option<u32>) -> Result<String, JsValue> {
        units::distance_to_feet(meters, precision_or_default(precision))
            .map_err(|e| JsValue::from_str(&format!("Failed to format distance: {}", e)))
    }

    /// m -> mi; precision defaults to 0 when omitted
    #[wasm_bindgen]
    pub fn distance_to_miles(&self, meters: f64, precision: Option<u32>) -> Result<String, JsValue> {
        units::distance_to_miles(meters, precision_or_default(precision))
            .map_err(|e| JsValue::from_str(&format!("Failed to format distance: {}", e)))
    }

    /// Render the details panel for one `location-updated` payload
    /// Returns JSON string array of {"label": ..., "value": ...}
    #[wasm_bindgen]
    pub fn render_details(
        &self,
        update_json: &str,
        config_content: Option<String>,
    ) -> Result<String, JsValue> {
        let panel = build_panel(update_json, config_content)?;

        let json = serde_json::to_string(&panel)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize panel: {}", e)))?;

        Ok(json)
    }

    /// Same as `render_details`, as a JS array of [label, value] pairs
    /// (value is `undefined` when the device sent no reading)
    #[wasm_bindgen]
    pub fn details_rows(
        &self,
        update_json: &str,
        config_content: Option<String>,
    ) -> Result<js_sys::Array, JsValue> {
        let panel = build_panel(update_json, config_content)?;

        let rows = js_sys::Array::new();
        for field in &panel.fields {
            let value = field
                .value
                .as_deref()
                .map(JsValue::from_str)
                .unwrap_or(JsValue::UNDEFINED);
            rows.push(&js_sys::Array::of2(&JsValue::from_str(&field.label), &value));
        }

        Ok(rows)
    }
}

fn precision_or_default(precision: Option<u32>) -> usize {
    precision
        .map(|p| p as usize)
        .unwrap_or(units::DEFAULT_PRECISION)
}

fn build_panel(update_json: &str, config_content: Option<String>) -> Result<DetailsPanel, JsValue> {
    let update = LocationUpdate::from_json_str(update_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse location update: {}", e)))?;

    let config = match config_content {
        Some(content) => DisplayConfig::load_from_str(&content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
        None => DisplayConfig::empty(),
    };

    DetailsPanel::build(&update, &config)
        .map_err(|e| JsValue::from_str(&format!("Failed to render details: {}", e)))
}
