use mmvi::{ConfigError, StoreConfig};
use std::fs;
use tempfile::TempDir;

/// Test that StoreConfig::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = StoreConfig::default();

    assert_eq!(config.name, "store");
    assert!(!config.trace_commits);
    assert!(config.log_unmatched);
    assert!(config.validate().is_ok());
}

/// Test that a missing file falls back to defaults.
#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, StoreConfig::default());
}

/// Test parsing a full `[store]` table from disk.
#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[store]
name = "checkout"
trace_commits = true
log_unmatched = false

[unrelated]
key = "ignored"
"#,
    )
    .unwrap();

    let config = StoreConfig::load_from(&path).unwrap();
    assert_eq!(config.name, "checkout");
    assert!(config.trace_commits);
    assert!(!config.log_unmatched);
}

/// Test that invalid TOML reports the file path.
#[test]
fn test_load_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[store\nname = ").unwrap();

    match StoreConfig::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

/// Test that an unreadable path is a read error.
#[test]
fn test_load_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = StoreConfig::load_from(dir.path());
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

/// Test that validation runs on loaded files.
#[test]
fn test_load_blank_name_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[store]\nname = \"\"\n").unwrap();

    let err = StoreConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Store name"));
}

/// Test serialize/parse keeps every field.
#[test]
fn test_config_roundtrip() {
    let config = StoreConfig {
        name: "profile".to_string(),
        trace_commits: true,
        log_unmatched: false,
    };
    let table = toml::to_string(&config).unwrap();
    let parsed = StoreConfig::from_toml(&format!("[store]\n{}", table)).unwrap();
    assert_eq!(parsed, config);
}
