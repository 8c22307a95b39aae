//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::DefaultMode;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_easel_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        easel_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[ai]
model = "claude-test"
default_mode = "chat"

[colors]
primary = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.ai.model, "claude-test");
    assert_eq!(config.ai.default_mode, DefaultMode::Chat);
    assert_eq!(config.colors.primary, "#ff0000");
    // Defaults preserved
    assert_eq!(config.colors.background, "#0b0e14");
    assert_eq!(config.canvas.max_content_blocks, 64);
    assert_eq!(config.theme.name, "easel-dark");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result.unwrap_err(),
        easel_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn out_of_range_values_are_returned_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ai]\ntemperature = 3.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.ai.temperature - 3.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("easel").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "easel-dark");
    assert_eq!(config.theme.alternate, "easel-light");
    assert_eq!(config.canvas.max_commands, 256);
}

#[test]
fn default_config_path_ends_with_easel() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("easel/config.toml"));
    }
}
