//! Configuration schema types for Easel.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults.

mod ai;
mod canvas;
mod system;
mod theme;

pub use ai::*;
pub use canvas::*;
pub use system::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Easel.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EaselConfig {
    pub theme: ThemeConfig,
    pub colors: ColorConfig,
    pub ai: AiConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
}
