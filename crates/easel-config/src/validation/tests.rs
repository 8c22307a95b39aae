//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = EaselConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_command_capacity() {
    let mut config = EaselConfig::default();
    config.canvas.max_commands = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("canvas.max_commands"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = EaselConfig::default();
    config.ai.temperature = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.temperature"));
}

#[test]
fn catches_tiny_wire_buffer() {
    let mut config = EaselConfig::default();
    config.canvas.wire_buffer_bytes = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("canvas.wire_buffer_bytes"));
}

#[test]
fn catches_bad_palette_color() {
    let mut config = EaselConfig::default();
    config.colors.danger = "reddish".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.danger"));
}

#[test]
fn catches_empty_model() {
    let mut config = EaselConfig::default();
    config.ai.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ai.model"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = EaselConfig::default();
    config.canvas.max_content_blocks = 0;
    config.ai.max_history = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("canvas.max_content_blocks"));
    assert!(err.contains("ai.max_history"));
    assert!(err.contains("; "));
}
