//! Drawing command model and canvas for Easel.
//!
//! The assistant draws by emitting tool invocations; each one becomes a
//! newline-delimited JSON "wire line" that decodes into a [`DrawCommand`].
//! Commands live in a fixed-capacity [`CanvasBuffer`] whose text is
//! bump-allocated from a [`StringPool`], and are replayed every frame onto
//! a [`PaintSurface`] with colors resolved against the active [`Theme`].
//!
//! - [`command`]: variants, wire decode/encode, decode errors
//! - [`schema`]: compile-time tool schema table and system prompt
//! - [`buffer`]: the canvas buffer (push / clear / replay)
//! - [`surface`]: paint surface trait and the SVG exporter

pub mod buffer;
pub mod color;
pub mod command;
pub mod pool;
pub mod schema;
pub mod surface;

pub use buffer::{CanvasBuffer, CanvasLimits, LoadReport};
pub use color::{ColorToken, SemanticColor, Theme};
pub use command::{decode, encode, CommandKind, DecodeError, DrawCommand};
pub use pool::{StringPool, TextRef};
pub use schema::{ToolSchema, SYSTEM_PROMPT, TOOL_SCHEMAS};
pub use surface::{PaintSurface, Point, Rect, SvgSurface, TextAlign};

/// Logical canvas width in canvas units.
pub const CANVAS_WIDTH: f32 = 500.0;
/// Logical canvas height in canvas units.
pub const CANVAS_HEIGHT: f32 = 400.0;
