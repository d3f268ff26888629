#[cfg(test)]
mod tests {
    use super::super::loader::*;
    use super::super::models::*;

    const FULL_UPDATE: &str = r#"{
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [-122.4194, 37.7749, 16.0] },
        "properties": {
            "device_id": "phone-1",
            "timestamp": "2019-08-14T17:03:21Z",
            "battery_level": 0.87,
            "battery_state": "unplugged",
            "wifi": "home",
            "speed": 10.0,
            "motion": ["driving", "stationary"],
            "altitude": 16.0,
            "vertical_accuracy": 3.0,
            "horizontal_accuracy": 5.0,
            "distance": 1609.344,
            "course": 271.5
        }
    }"#;

    #[test]
    fn test_parse_full_update() {
        let update = LocationUpdate::from_json_str(FULL_UPDATE).unwrap();
        let props = &update.properties;

        assert_eq!(update.longitude(), Some(-122.4194));
        assert_eq!(update.latitude(), Some(37.7749));
        assert_eq!(props.device_id.as_deref(), Some("phone-1"));
        assert_eq!(props.battery_level, Some(0.87));
        assert_eq!(props.speed, Some(10.0));
        assert_eq!(
            props.motion,
            Some(vec!["driving".to_string(), "stationary".to_string()])
        );
        assert_eq!(props.distance, Some(1609.344));
    }

    #[test]
    fn test_unknown_properties_kept_in_extra() {
        let update = LocationUpdate::from_json_str(FULL_UPDATE).unwrap();
        assert_eq!(
            update.properties.extra.get("course"),
            Some(&serde_json::json!(271.5))
        );
        assert!(!update.properties.extra.contains_key("speed"));
    }

    #[test]
    fn test_missing_properties_default_to_absent() {
        let update =
            LocationUpdate::from_json_str(r#"{"geometry": {"coordinates": [1.5, 2.5]}}"#).unwrap();
        assert_eq!(update.properties, LocationProperties::default());
        assert_eq!(update.type_, "Feature");
        assert_eq!(update.geometry.type_, "Point");
    }

    #[test]
    fn test_null_readings_are_absent() {
        let update = LocationUpdate::from_json_str(
            r#"{"geometry": {"coordinates": [0, 0]}, "properties": {"speed": null}}"#,
        )
        .unwrap();
        assert_eq!(update.properties.speed, None);
    }

    #[test]
    fn test_short_coordinates_rejected() {
        let result = LocationUpdate::from_json_str(r#"{"geometry": {"coordinates": [1.0]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_location() {
        let update = LocationUpdate::initial();
        assert_eq!(update.longitude(), Some(-122.440629));
        assert_eq!(update.latitude(), Some(37.766945));
        assert_eq!(update.properties.device_id, None);
    }

    #[test]
    fn test_load_array_reports_bad_entries() {
        let content = r#"[
            {"geometry": {"coordinates": [1, 2]}},
            {"geometry": {"coordinates": [3]}},
            {"geometry": {"coordinates": [5, 6]}, "properties": {"device_id": "b"}}
        ]"#;

        let (updates, validation) = load_location_updates_from_str(content).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].properties.device_id.as_deref(), Some("b"));
        assert!(!validation.is_valid());
        assert_eq!(validation.errors().count(), 1);
        assert_eq!(
            validation.errors().next().unwrap().location.as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn test_load_newline_delimited() {
        let content = concat!(
            r#"{"geometry": {"coordinates": [1, 2]}, "properties": {"speed": 1.0}}"#,
            "\n\n",
            "not json\n",
            r#"{"geometry": {"coordinates": [3, 4]}, "properties": {"speed": 2.0}}"#,
            "\n"
        );

        let (updates, validation) = load_location_updates_from_str(content).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].properties.speed, Some(1.0));
        assert_eq!(updates[1].properties.speed, Some(2.0));
        assert_eq!(validation.errors().count(), 1);
        assert_eq!(
            validation.errors().next().unwrap().location.as_deref(),
            Some("line 3")
        );
    }

    #[test]
    fn test_load_single_feature() {
        let (updates, validation) = load_location_updates_from_str(FULL_UPDATE).unwrap();
        assert_eq!(updates.len(), 1);
        assert!(!validation.has_issues());
    }

    #[test]
    fn test_load_single_bad_feature_fails() {
        assert!(load_location_updates_from_str(r#"{"geometry": {}}"#).is_err());
    }

    #[test]
    fn test_empty_input_loads_nothing() {
        let (updates, validation) = load_location_updates_from_str("  \n").unwrap();
        assert!(updates.is_empty());
        assert!(!validation.has_issues());
    }

    #[test]
    fn test_out_of_range_readings_warned() {
        let content = r#"{"geometry": {"coordinates": [200, 95]}, "properties": {"battery_level": 87}}"#;
        let (updates, validation) = load_location_updates_from_str(content).unwrap();

        assert_eq!(updates.len(), 1);
        assert!(validation.is_valid());
        assert_eq!(validation.warnings().count(), 3);
        assert!(validation
            .warnings()
            .any(|w| w.location.as_deref() == Some("update/properties/battery_level")));
    }

    #[test]
    fn test_validation_report_text() {
        let content = concat!(
            r#"{"geometry": {"coordinates": [1, 95]}}"#,
            "\n",
            "{\n"
        );
        let (_, validation) = load_location_updates_from_str(content).unwrap();
        let report = validation.to_string();

        assert!(report.starts_with("Errors:\n  [line 2] "));
        assert!(report.contains("Warnings:\n  [line 1/geometry/coordinates[1]] Latitude 95 is outside -90..90\n"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_location_updates("/nonexistent/updates.json").is_err());
        assert!(load_location_update("/nonexistent/update.json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tracku-update-{}.json", std::process::id()));
        std::fs::write(&path, FULL_UPDATE).unwrap();

        let update = load_location_update(&path).unwrap();
        let (updates, _) = load_location_updates(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(updates, vec![update]);
    }
}
