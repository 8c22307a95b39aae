//! Drawing tool definitions sent to the model.
//!
//! The definitions are derived from the canvas crate's static schema
//! table, so the model sees exactly the tools the decoder accepts.

use std::sync::LazyLock;

use easel_canvas::TOOL_SCHEMAS;

use crate::ToolDefinition;

static DRAW_TOOLS: LazyLock<Vec<ToolDefinition>> = LazyLock::new(|| {
    TOOL_SCHEMAS
        .iter()
        .map(|schema| ToolDefinition {
            name: schema.name.to_string(),
            description: schema.description.to_string(),
            parameters: schema.input_schema(),
        })
        .collect()
});

/// One tool definition per draw command, in declaration order.
pub fn draw_tools() -> &'static [ToolDefinition] {
    &DRAW_TOOLS
}

/// Convert a tool definition to the Claude API `tools` entry format.
pub fn to_claude_tool(tool: &ToolDefinition) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name,
        "description": tool.description,
        "input_schema": tool.parameters,
    })
}
