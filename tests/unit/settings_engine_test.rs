//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, in-memory updates and reset behavior.

use std::fs;

use bookmark_gallery::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use bookmark_gallery::types::errors::SettingsError;
use bookmark_gallery::types::filter::SortOrder;
use bookmark_gallery::types::settings::GallerySettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        GallerySettings::default(),
        "Loading without a config file must return default settings"
    );
    assert_eq!(settings.categorization.fallback_category, "Other");
    assert_eq!(settings.import.uncategorized_folder, "Uncategorized");
}

#[test]
fn test_load_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(
        engine.get_config_path(),
        r#"{
            "categorization": { "fallback_category": "Misc", "domain_heuristics": false },
            "logging": { "filter": "bookmark_gallery=debug" }
        }"#,
    )
    .unwrap();

    let settings = engine.load().unwrap();
    assert_eq!(settings.categorization.fallback_category, "Misc");
    assert!(!settings.categorization.domain_heuristics);
    assert_eq!(settings.logging.filter, "bookmark_gallery=debug");
    assert_eq!(settings.view.sort_order, SortOrder::Document);
}

#[test]
fn test_load_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(engine.get_config_path(), "[1, 2").unwrap();

    let result = engine.load();
    assert!(matches!(result, Err(SettingsError::Serialization(_))));
}

#[test]
fn test_set_value_updates_nested_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("view.sort_order", serde_json::json!("NewestFirst"))
        .unwrap();
    engine
        .set_value("categorization.domain_heuristics", serde_json::json!(false))
        .unwrap();

    let settings = engine.get_settings();
    assert_eq!(settings.view.sort_order, SortOrder::NewestFirst);
    assert!(!settings.categorization.domain_heuristics);
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("view.columns", serde_json::json!(3)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(3)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("view.sort_order.inner", serde_json::json!(3)),
        Err(SettingsError::InvalidKey(_))
    ));
}

/// A value of the wrong type is refused and the previous settings survive.
#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("categorization.domain_heuristics", serde_json::json!("yes"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert!(engine.get_settings().categorization.domain_heuristics);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("import.untitled_label", serde_json::json!("(none)"))
        .unwrap();

    engine.reset();

    assert_eq!(engine.get_settings(), &GallerySettings::default());
}

/// Blank labels would leave bookmarks with an empty title, folder or category.
#[test]
fn test_set_value_rejects_blank_labels() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    for key in [
        "categorization.fallback_category",
        "import.untitled_label",
        "import.uncategorized_folder",
    ] {
        let result = engine.set_value(key, serde_json::json!("  "));
        assert!(
            matches!(result, Err(SettingsError::InvalidValue(_))),
            "blank value for {} must be refused",
            key
        );
    }
    assert_eq!(engine.get_settings(), &GallerySettings::default());
}

#[test]
fn test_load_rejects_blank_label_in_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    fs::write(
        engine.get_config_path(),
        r#"{ "import": { "uncategorized_folder": "" } }"#,
    )
    .unwrap();

    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_loaded_from_file_tracks_source() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert!(!engine.loaded_from_file());

    fs::write(engine.get_config_path(), "{}").unwrap();
    engine.load().unwrap();
    assert!(engine.loaded_from_file());
}
