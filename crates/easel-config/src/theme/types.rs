//! Theme type definitions and constants.
//!
//! Contains the override structs used to partially replace the palette
//! when a theme is applied, plus the list of built-in theme names.

use serde::{Deserialize, Serialize};

/// Built-in theme names.
pub const BUILT_IN_THEMES: &[&str] = &["easel-dark", "easel-light"];

/// Theme override structure.
///
/// All fields are optional; only present fields override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub name: Option<String>,
    pub colors: Option<ThemeColorOverrides>,
}

/// Optional per-role color overrides in a theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub danger: Option<String>,
}

/// Overrides for the built-in light palette.
pub(super) fn easel_light() -> ThemeOverrides {
    let color = |s: &str| Some(s.to_string());
    ThemeOverrides {
        name: Some("easel-light".into()),
        colors: Some(ThemeColorOverrides {
            primary: color("#0066cc"),
            secondary: color("#d9480f"),
            accent: color("#7048e8"),
            background: color("#fafafa"),
            surface: color("#ffffff"),
            text: color("#1f2328"),
            text_muted: color("#6e7781"),
            border: color("#d0d7de"),
            success: color("#1a7f37"),
            warning: color("#bf8700"),
            danger: color("#cf222e"),
        }),
    }
}
