use pwgen::configtool::*;
use pwgen::ConfigError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "length": 24,
            "symbols": true,
            "numbers": false,
            "exclude_similar": true,
            "min_length": 10,
            "max_length": 64,
            "verbose": true
        }"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.length, Some(24));
    assert_eq!(config.symbols, Some(true));
    assert_eq!(config.numbers, Some(false));
    assert_eq!(config.exclude_similar, Some(true));
    assert_eq!(config.min_length, Some(10));
    assert_eq!(config.max_length, Some(64));
    assert_eq!(config.verbose, Some(true));
}

#[test]
fn test_load_partial_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "symbols": true }"#).unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.symbols, Some(true));
    assert_eq!(config.length, None);
    assert_eq!(config.numbers, None);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = tempdir().unwrap();
    let result = load_config(Some(&dir.path().join("absent.json")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_config_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ length: 12").unwrap();
    assert!(matches!(load_config(Some(&path)), Err(ConfigError::Json(_))));
}

#[test]
fn test_unknown_field_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unknown.json");
    fs::write(&path, r#"{ "lenght": 12 }"#).unwrap();
    assert!(matches!(load_config(Some(&path)), Err(ConfigError::Json(_))));
}

#[test]
fn test_wrong_type_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typed.json");
    fs::write(&path, r#"{ "length": "twelve" }"#).unwrap();
    assert!(matches!(load_config(Some(&path)), Err(ConfigError::Json(_))));
}

#[test]
fn test_default_config_path_location() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("pwgen/config.json"));
    }
}
