use crate::telemetry::models::*;
use crate::telemetry::validation::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

impl LocationUpdate {
    /// Parse a single update from its JSON text
    pub fn from_json_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let update: LocationUpdate = serde_json::from_str(content)?;
        check_geometry(&update)?;
        Ok(update)
    }
}

pub fn load_location_update<P: AsRef<Path>>(
    path: P,
) -> Result<LocationUpdate, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    LocationUpdate::from_json_str(&content)
}

/// Load every update in a capture file.
/// Accepts a single feature, a JSON array of features, or one feature per line.
pub fn load_location_updates<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<LocationUpdate>, ValidationResult), Box<dyn std::error::Error>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()).into());
    }

    let content = fs::read_to_string(path)?;
    load_location_updates_from_str(&content)
}

/// Same as [`load_location_updates`] for content already in memory
/// (stdin, or text handed over from the browser)
pub fn load_location_updates_from_str(
    content: &str,
) -> Result<(Vec<LocationUpdate>, ValidationResult), Box<dyn std::error::Error>> {
    let mut updates = Vec::new();
    let mut validation = ValidationResult::new();

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok((updates, validation));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => {
            for (idx, item) in items.into_iter().enumerate() {
                let location = format!("[{}]", idx);
                match update_from_value(item) {
                    Ok(update) => {
                        check_readings(&update, &location, &mut validation);
                        updates.push(update);
                    }
                    Err(e) => validation.add_error(e.to_string(), Some(location)),
                }
            }
        }
        Ok(value) => {
            // A lone feature is the whole input, so a bad one fails the load
            let update = update_from_value(value)?;
            check_readings(&update, "update", &mut validation);
            updates.push(update);
        }
        Err(_) => {
            log::debug!("input is not a single JSON document, reading it line by line");
            for (idx, line) in trimmed.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let location = format!("line {}", idx + 1);
                match LocationUpdate::from_json_str(line) {
                    Ok(update) => {
                        check_readings(&update, &location, &mut validation);
                        updates.push(update);
                    }
                    Err(e) => validation.add_error(e.to_string(), Some(location)),
                }
            }
        }
    }

    Ok((updates, validation))
}

fn update_from_value(value: Value) -> Result<LocationUpdate, Box<dyn std::error::Error>> {
    let update: LocationUpdate = serde_json::from_value(value)?;
    check_geometry(&update)?;
    Ok(update)
}

/// A position needs at least a finite longitude and latitude
fn check_geometry(update: &LocationUpdate) -> Result<(), Box<dyn std::error::Error>> {
    let coordinates = &update.geometry.coordinates;
    if coordinates.len() < 2 {
        return Err(format!(
            "Expected [longitude, latitude] coordinates, got {} value(s)",
            coordinates.len()
        )
        .into());
    }
    if coordinates.iter().any(|c| !c.is_finite()) {
        return Err("Coordinates must be finite numbers".into());
    }
    Ok(())
}

/// Readings that parse but look wrong are kept and flagged
fn check_readings(update: &LocationUpdate, location: &str, validation: &mut ValidationResult) {
    if let Some(lat) = update.latitude() {
        if !(-90.0..=90.0).contains(&lat) {
            validation.add_warning(
                format!("Latitude {} is outside -90..90", lat),
                Some(format!("{}/geometry/coordinates[1]", location)),
            );
        }
    }
    if let Some(lon) = update.longitude() {
        if !(-180.0..=180.0).contains(&lon) {
            validation.add_warning(
                format!("Longitude {} is outside -180..180", lon),
                Some(format!("{}/geometry/coordinates[0]", location)),
            );
        }
    }
    if let Some(level) = update.properties.battery_level {
        if !(0.0..=1.0).contains(&level) {
            validation.add_warning(
                format!("Battery level {} is not a fraction between 0 and 1", level),
                Some(format!("{}/properties/battery_level", location)),
            );
        }
    }
}
