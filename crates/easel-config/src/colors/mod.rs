//! Color parsing and validation for palette entries.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)`, and
//! `rgba(r,g,b,a)`.

mod parse;


use easel_common::types::Color;
use easel_common::ConfigError;

use parse::{parse_hex, parse_rgba};

/// Parse a palette color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Whether a string is a recognized palette color.
pub fn validate_color(s: &str) -> bool {
    parse_color(s).is_ok()
}
