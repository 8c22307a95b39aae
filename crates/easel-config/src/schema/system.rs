//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive for the easel crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "easel=trace",
            LogLevel::Debug => "easel=debug",
            LogLevel::Info => "easel=info",
            LogLevel::Warn => "easel=warn",
            LogLevel::Error => "easel=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
