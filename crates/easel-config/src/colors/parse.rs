//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and rgb()/rgba() strings
//! into [`Color`] values.

use easel_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgb()/rgba(); the alpha component is optional.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

/// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = &s[1..];
    if hex.len() == 3 {
        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        return Some(Color::from_rgba(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
            255,
        ));
    }
    Color::from_hex(hex)
}

/// Parse `rgb(r,g,b)` or `rgba(r,g,b,a)`.
/// A fractional alpha is 0.0-1.0 (CSS convention); an integer alpha is 0-255.
pub(super) fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4).map(|m| m.as_str()) {
        None => 255,
        Some(a_str) if a_str.contains('.') => {
            let a_float: f64 = a_str.parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        Some(a_str) => a_str.parse::<u8>().ok()?,
    };

    Some(Color::from_rgba(r, g, b, a))
}
