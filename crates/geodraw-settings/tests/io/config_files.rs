use geodraw_core::{EdgeClearance, PlacementRules};
use geodraw_settings::{Config, SettingsError};
use std::path::PathBuf;
use tempfile::tempdir;

fn customised() -> Config {
    let mut config = Config::new();
    config.placement = PlacementRules {
        min_vertex_spacing: 12.5,
        min_edge_clearance: 3.0,
        edge_clearance: EdgeClearance::Line,
    };
    config.display.decimal_places = 3;
    config.files.drawing_directory = PathBuf::from("/srv/drawings");
    config.add_recent_file(PathBuf::from("/srv/drawings/house.json"));
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = customised();
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[placement]"));
    assert!(content.contains("edge_clearance = \"line\""));

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = customised();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("geodraw").join("nested").join("config.toml");

    Config::default().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_or_default() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[placement\nmin_vertex_spacing = ").unwrap();
    assert!(matches!(
        Config::load_or_default(&broken),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_invalid_values_refused_on_load_and_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "placement": { "min_vertex_spacing": -4.0 } }"#).unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Placement(_))
    ));

    let mut config = Config::default();
    config.display.decimal_places = 42;
    assert!(config.save_to_file(&dir.path().join("out.toml")).is_err());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    assert!(matches!(
        Config::default().save_to_file(&path),
        Err(SettingsError::Config(_))
    ));
}

#[test]
fn test_default_path_layout() {
    if let Ok(path) = Config::default_path() {
        assert!(path.ends_with("geodraw/config.toml"));
    }
}
