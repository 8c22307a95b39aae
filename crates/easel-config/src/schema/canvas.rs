//! Canvas capacity and export configuration.

use serde::{Deserialize, Serialize};

/// Canvas buffer limits and staging buffer sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Maximum live draw commands (valid range: 1-65536).
    pub max_commands: u32,
    /// Bytes reserved for text referenced by draw commands (valid range: 256-1048576).
    pub string_pool_bytes: u32,
    /// Bytes reserved for staged wire lines per response (valid range: 1024-4194304).
    pub wire_buffer_bytes: u32,
    /// Bytes reserved for staged assistant text per response (valid range: 256-1048576).
    pub text_buffer_bytes: u32,
    /// Content blocks examined per response (valid range: 1-4096).
    pub max_content_blocks: u32,
    /// Where the rendered canvas is written as SVG.
    pub export_path: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_commands: 256,
            string_pool_bytes: 4096,
            wire_buffer_bytes: 16384,
            text_buffer_bytes: 4096,
            max_content_blocks: 64,
            export_path: "easel-canvas.svg".into(),
        }
    }
}
