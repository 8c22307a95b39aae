//! Draw command model and wire-line codec.
//!
//! A wire line is one JSON object naming the tool and carrying every
//! parameter the tool's schema requires:
//!
//! ```text
//! {"tool":"fill_rect","x":0,"y":0,"w":100,"h":50,"color":"FF0000"}
//! {"tool":"draw_text","x":10,"y":10,"text":"Hello","font_size":16,"color":"primary"}
//! ```
//!
//! Text fields are stored internally as `text_ref` (a pool reference) and
//! appear on the wire and in the schema as `text`.

#[macro_use]
mod define;
mod field;

#[cfg(test)]
mod tests;

use serde_json::Value;

use crate::color::ColorToken;
use crate::pool::{StringPool, TextRef};

use field::{accepts, write_json_string, write_key, WireField};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("wire line is not a JSON object: {0}")]
    Syntax(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("{tool}: missing field '{field}'")]
    MissingField {
        tool: &'static str,
        field: &'static str,
    },

    #[error("{tool}: field '{field}' should be {expected}")]
    TypeMismatch {
        tool: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{tool}: text does not fit in the string pool")]
    PoolExhausted { tool: &'static str },
}

draw_commands! {
    /// Filled axis-aligned rectangle.
    FillRect = "fill_rect", "Fill an axis-aligned rectangle." {
        x: f32 = "x", "Left edge.";
        y: f32 = "y", "Top edge.";
        w: f32 = "w", "Width.";
        h: f32 = "h", "Height.";
        color: ColorToken = "color", "Fill color: 6-digit hex or theme color name.";
    }
    /// Rectangle outline.
    StrokeRect = "stroke_rect", "Draw the outline of an axis-aligned rectangle." {
        x: f32 = "x", "Left edge.";
        y: f32 = "y", "Top edge.";
        w: f32 = "w", "Width.";
        h: f32 = "h", "Height.";
        thickness: f32 = "thickness", "Outline width.";
        color: ColorToken = "color", "Outline color: 6-digit hex or theme color name.";
    }
    FillRoundedRect = "fill_rounded_rect", "Fill a rectangle with rounded corners." {
        x: f32 = "x", "Left edge.";
        y: f32 = "y", "Top edge.";
        w: f32 = "w", "Width.";
        h: f32 = "h", "Height.";
        radius: f32 = "radius", "Corner radius.";
        color: ColorToken = "color", "Fill color: 6-digit hex or theme color name.";
    }
    FillCircle = "fill_circle", "Fill a circle." {
        cx: f32 = "cx", "Center x.";
        cy: f32 = "cy", "Center y.";
        radius: f32 = "radius", "Radius.";
        color: ColorToken = "color", "Fill color: 6-digit hex or theme color name.";
    }
    FillEllipse = "fill_ellipse", "Fill an axis-aligned ellipse." {
        cx: f32 = "cx", "Center x.";
        cy: f32 = "cy", "Center y.";
        rx: f32 = "rx", "Horizontal radius.";
        ry: f32 = "ry", "Vertical radius.";
        color: ColorToken = "color", "Fill color: 6-digit hex or theme color name.";
    }
    StrokeCircle = "stroke_circle", "Draw the outline of a circle." {
        cx: f32 = "cx", "Center x.";
        cy: f32 = "cy", "Center y.";
        radius: f32 = "radius", "Radius.";
        thickness: f32 = "thickness", "Outline width.";
        color: ColorToken = "color", "Outline color: 6-digit hex or theme color name.";
    }
    FillTriangle = "fill_triangle", "Fill a triangle given its three corners." {
        x1: f32 = "x1", "First corner x.";
        y1: f32 = "y1", "First corner y.";
        x2: f32 = "x2", "Second corner x.";
        y2: f32 = "y2", "Second corner y.";
        x3: f32 = "x3", "Third corner x.";
        y3: f32 = "y3", "Third corner y.";
        color: ColorToken = "color", "Fill color: 6-digit hex or theme color name.";
    }
    DrawLine = "draw_line", "Draw a straight line segment." {
        x1: f32 = "x1", "Start x.";
        y1: f32 = "y1", "Start y.";
        x2: f32 = "x2", "End x.";
        y2: f32 = "y2", "End y.";
        thickness: f32 = "thickness", "Line width.";
        color: ColorToken = "color", "Line color: 6-digit hex or theme color name.";
    }
    /// Left-aligned text; `(x, y)` is the top-left corner.
    DrawText = "draw_text", "Draw text with its top-left corner at (x, y)." {
        x: f32 = "x", "Left edge of the text.";
        y: f32 = "y", "Top edge of the text.";
        text_ref: TextRef = "text", "The text to display.";
        font_size: f32 = "font_size", "Font size in canvas units.";
        color: ColorToken = "color", "Text color: 6-digit hex or theme color name.";
    }
    DrawTextCentered = "draw_text_centered", "Draw text centered on (cx, cy)." {
        cx: f32 = "cx", "Center x of the text.";
        cy: f32 = "cy", "Center y of the text.";
        text_ref: TextRef = "text", "The text to display.";
        font_size: f32 = "font_size", "Font size in canvas units.";
        color: ColorToken = "color", "Text color: 6-digit hex or theme color name.";
    }
    /// Fills the whole canvas.
    SetBackground = "set_background", "Fill the whole canvas with one color." {
        color: ColorToken = "color", "Background color: 6-digit hex or theme color name.";
    }
}

impl DrawCommand {
    /// Pool reference of the command's text, if it carries any.
    pub fn text_ref(&self) -> Option<TextRef> {
        match *self {
            DrawCommand::DrawText { text_ref, .. }
            | DrawCommand::DrawTextCentered { text_ref, .. } => Some(text_ref),
            _ => None,
        }
    }
}

/// Decode one wire line, allocating any text into `pool`.
///
/// Every required field is checked before anything is allocated, so a
/// rejected line leaves the pool untouched.
pub fn decode(line: &str, pool: &mut StringPool) -> Result<DrawCommand, DecodeError> {
    let value: Value =
        serde_json::from_str(line.trim()).map_err(|e| DecodeError::Syntax(e.to_string()))?;
    let params = value
        .as_object()
        .ok_or_else(|| DecodeError::Syntax("expected an object".into()))?;

    let tool = match params.get("tool") {
        Some(Value::String(name)) => name.as_str(),
        Some(_) => {
            return Err(DecodeError::TypeMismatch {
                tool: "?",
                field: "tool",
                expected: "string",
            })
        }
        None => {
            return Err(DecodeError::MissingField {
                tool: "?",
                field: "tool",
            })
        }
    };

    let kind =
        CommandKind::from_tool_name(tool).ok_or_else(|| DecodeError::UnknownTool(tool.into()))?;
    let schema = kind.schema();

    for prop in schema.properties {
        let value = params.get(prop.name).ok_or(DecodeError::MissingField {
            tool: schema.name,
            field: prop.name,
        })?;
        if !accepts(prop.kind, value) {
            return Err(DecodeError::TypeMismatch {
                tool: schema.name,
                field: prop.name,
                expected: prop.kind.expected(),
            });
        }
    }

    DrawCommand::from_params(kind, params, pool)
}

/// Encode a command as a wire line (no trailing newline).
///
/// Text is read back from `pool`, which must be the pool the command was
/// decoded into.
pub fn encode(command: &DrawCommand, pool: &StringPool) -> String {
    let mut out = String::with_capacity(96);
    out.push_str("{\"tool\":");
    write_json_string(&mut out, command.tool_name());
    command.write_params(pool, &mut out);
    out.push('}');
    out
}
