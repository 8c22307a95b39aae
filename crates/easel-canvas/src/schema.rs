//! Tool schema for the assistant's drawing tools.
//!
//! [`TOOL_SCHEMAS`] is generated by `draw_commands!` from the same
//! declarations as [`DrawCommand`](crate::DrawCommand), so the table cannot
//! drift from the variant set. The const block at the bottom turns a
//! count, order, or naming mismatch into a compile error.

use serde_json::{json, Map, Value};

use crate::command::{CommandKind, SCHEMA_TABLE};

/// JSON Schema type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    String,
}

impl ParamType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::String => "string",
        }
    }
}

/// How a parameter's value is interpreted by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Color,
    Text,
}

impl FieldKind {
    pub const fn param_type(self) -> ParamType {
        match self {
            FieldKind::Number => ParamType::Number,
            FieldKind::Color | FieldKind::Text => ParamType::String,
        }
    }

    pub const fn expected(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Color => "6-digit hex or semantic color",
            FieldKind::Text => "string",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropertySchema {
    /// External (wire and schema) parameter name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ToolSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub properties: &'static [PropertySchema],
}

impl ToolSchema {
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// JSON Schema object for the tool's input; every property is required.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for prop in self.properties {
            properties.insert(
                prop.name.to_string(),
                json!({
                    "type": prop.kind.param_type().as_str(),
                    "description": prop.description,
                }),
            );
        }
        let required: Vec<&str> = self.properties.iter().map(|p| p.name).collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// One schema entry per draw command variant, in declaration order.
pub static TOOL_SCHEMAS: [ToolSchema; CommandKind::COUNT] = SCHEMA_TABLE;

/// Sentence that tells the far end how canvas coordinates work.
pub const CANVAS_CONTRACT: &str =
    "The canvas is 500x400 units, origin top-left, Y increasing downward.";

/// Instructional preamble sent with every drawing request.
pub const SYSTEM_PROMPT: &str = "\
You are Easel, an assistant that draws pictures on a canvas by calling drawing tools.
The canvas is 500x400 units, origin top-left, Y increasing downward.
Every tool parameter is required. Coordinates and sizes are numbers in canvas units.
Colors are either a 6-digit hex string without '#' (for example \"FF8800\") or one of
these theme colors: primary, secondary, accent, background, surface, text, text_muted,
border, success, warning, danger. Prefer theme colors so the drawing follows the
user's light or dark theme.
Call set_background first, then draw shapes back to front: later calls paint over
earlier ones. Keep any accompanying text short.";

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(SCHEMA_TABLE.len() == CommandKind::ALL.len());
    let mut i = 0;
    while i < SCHEMA_TABLE.len() {
        assert!(
            str_eq(SCHEMA_TABLE[i].name, CommandKind::ALL[i].tool_name()),
            "schema order does not match variant order"
        );
        assert!(
            !SCHEMA_TABLE[i].properties.is_empty(),
            "every tool needs at least one parameter"
        );
        let mut j = i + 1;
        while j < SCHEMA_TABLE.len() {
            assert!(
                !str_eq(SCHEMA_TABLE[i].name, SCHEMA_TABLE[j].name),
                "duplicate tool name"
            );
            j += 1;
        }
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SemanticColor;

    #[test]
    fn one_tool_per_variant() {
        assert_eq!(TOOL_SCHEMAS.len(), CommandKind::ALL.len());
        assert_eq!(TOOL_SCHEMAS.len(), 11);
    }

    #[test]
    fn required_equals_full_property_set() {
        for tool in TOOL_SCHEMAS.iter() {
            let schema = tool.input_schema();
            let required: Vec<&str> = schema["required"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap())
                .collect();
            let props = schema["properties"].as_object().unwrap();
            assert_eq!(required.len(), props.len(), "tool {}", tool.name);
            for name in required {
                assert!(props.contains_key(name), "tool {}", tool.name);
            }
        }
    }

    #[test]
    fn text_tool_exposes_alias_not_pool_field() {
        let draw_text = CommandKind::DrawText.schema();
        let text = draw_text.property("text").unwrap();
        assert_eq!(text.kind, FieldKind::Text);
        assert_eq!(text.kind.param_type(), ParamType::String);
        assert!(draw_text.property("text_ref").is_none());
    }

    #[test]
    fn fill_rect_schema_shape() {
        let schema = CommandKind::FillRect.schema().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["x"]["type"], "number");
        assert_eq!(schema["properties"]["color"]["type"], "string");
        assert_eq!(
            schema["required"],
            json!(["x", "y", "w", "h", "color"])
        );
    }

    #[test]
    fn system_prompt_carries_canvas_contract_and_roles() {
        assert!(SYSTEM_PROMPT.contains(CANVAS_CONTRACT));
        for role in SemanticColor::ALL {
            assert!(SYSTEM_PROMPT.contains(role.name()), "missing {}", role.name());
        }
    }
}
