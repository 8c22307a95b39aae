//! Theme and color configuration types.

use serde::{Deserialize, Serialize};

/// Theme selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in theme name or path to custom theme YAML.
    pub name: String,
    /// Theme swapped in by the theme toggle.
    pub alternate: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "easel-dark".into(),
            alternate: "easel-light".into(),
        }
    }
}

/// Semantic color palette.
///
/// One entry per color role the assistant may reference by name.
/// Values are `#RRGGBB`, `#RRGGBBAA`, or `rgba(r,g,b,a)` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
}

impl ColorConfig {
    /// Every role paired with its configured value, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("success", &self.success),
            ("warning", &self.warning),
            ("danger", &self.danger),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#00d4ff".into(),
            secondary: "#ff6b00".into(),
            accent: "#cba6f7".into(),
            background: "#0b0e14".into(),
            surface: "#161b22".into(),
            text: "#f0ece4".into(),
            text_muted: "#888888".into(),
            border: "#30363d".into(),
            success: "#00ff88".into(),
            warning: "#ffb020".into(),
            danger: "#ff4444".into(),
        }
    }
}
