use omniscan::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.camera_interval_ms, 40);
    assert_eq!(settings.tracked_interval_ms, 100);
    assert_eq!(settings.poll_interval_ms, 100);
    assert!(!settings.debug_logging);
}

#[test]
fn settings_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.debug_logging = true;
    settings.camera_index = 2;
    settings.overlay_size = (400.0, 250.0);
    settings.save(path.to_str().unwrap()).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.camera_index, 2);
    assert_eq!(loaded.overlay_size, (400.0, 250.0));
}

#[test]
fn partial_file_applies_field_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true }"#).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.camera_interval_ms, 40);
    assert_eq!(loaded.overlay_size, (300.0, 300.0));
}
