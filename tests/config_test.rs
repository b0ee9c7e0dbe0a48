//! App state persistence through real files

use decarbonator_dashboard::config::{AppState, APP_STATE_FILE, DEFAULT_WINDOW_SIZE};

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(APP_STATE_FILE);

    let mut state = AppState::default();
    state.ui_preferences.dark_mode = false;
    state.ui_preferences.font_scale = 1.5;
    state.update_window_size(1280.0, 800.0);

    state.save_to(&path).unwrap();
    let loaded = AppState::load_from(&path).unwrap();

    assert_eq!(loaded, state);
}

#[test]
fn test_saved_file_has_no_routing_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(APP_STATE_FILE);

    AppState::default().save_to(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(!content.contains("page"));
    assert!(!content.contains("plants"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = AppState::load_from(dir.path().join("nope.json")).unwrap();
    assert_eq!(loaded, AppState::default());
    assert_eq!(loaded.window_size, DEFAULT_WINDOW_SIZE);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join(APP_STATE_FILE);

    AppState::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(APP_STATE_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    let err = AppState::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse app state"));
}

#[test]
fn test_out_of_range_font_scale_is_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(APP_STATE_FILE);
    std::fs::write(&path, r#"{"ui_preferences": {"font_scale": 0.01}}"#).unwrap();

    let loaded = AppState::load_from(&path).unwrap();
    assert_eq!(loaded.ui_preferences.font_scale, 0.5);
}
