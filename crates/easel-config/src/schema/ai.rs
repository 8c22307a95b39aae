//! Assistant request configuration.

use serde::{Deserialize, Serialize};

/// Which request shape a send uses when no mode is given explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DefaultMode {
    Chat,
    #[default]
    Draw,
}

/// Assistant API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    /// Valid range: 256-32768.
    pub max_tokens: u32,
    /// Valid range: 0.0-1.0.
    pub temperature: f64,
    /// Per-request transport timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
    /// Maximum number of history messages sent with a request (valid range: 2-200).
    pub max_history: u32,
    pub default_mode: DefaultMode,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 120,
            max_history: 40,
            default_mode: DefaultMode::Draw,
        }
    }
}
