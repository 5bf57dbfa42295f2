//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, ModelChoice};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_cloner_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        cloner_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[api]
model = "gemini-1.5-pro"
temperature = 0.2

[context]
image = "shots/settings.png"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.model, ModelChoice::Pro);
    assert!((config.api.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(
        config.context.image.as_deref(),
        Some(Path::new("shots/settings.png"))
    );
    // Defaults preserved
    assert_eq!(config.api.max_output_tokens, 8192);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, cloner_common::ConfigError::ParseError(_)));
}

#[test]
fn unknown_model_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nmodel = \"gemini-ultra\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, cloner_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\ntemperature = 5.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.api.temperature - 5.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cloner").join("config.toml");

    assert!(create_default_config(&path).unwrap());
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.model, ModelChoice::Flash);
    assert!(config.api.api_key.is_none());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ClonerConfig;

    let config: ClonerConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.api.model, ModelChoice::Flash);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("cloner"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn existing_config_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nmodel = \"gemini-1.5-pro\"\n").unwrap();

    assert!(!create_default_config(&path).unwrap());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.model, ModelChoice::Pro);
}

#[test]
fn unwritable_location_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();

    let err = create_default_config(&blocker.join("config.toml")).unwrap_err();
    assert!(matches!(err, cloner_common::ConfigError::Write { .. }));
}

#[test]
fn parse_config_fills_defaults() {
    let config = parse_config("[logging]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.api.model, ModelChoice::Flash);

    assert!(parse_config("").is_ok());
    assert!(matches!(
        parse_config("[api]\ntemperature = \"hot\"\n"),
        Err(cloner_common::ConfigError::ParseError(_))
    ));
}
