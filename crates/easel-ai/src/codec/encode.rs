//! Re-encoding a single tool invocation as a wire line.

use serde_json::{Map, Value};
use tracing::debug;

/// Encode a tool invocation as one newline-terminated wire line.
///
/// Parameters are written in the map's order after the `tool` key.
/// Returns `None` when any parameter value is an array or an object; a
/// parameter named `tool` is ignored so it cannot shadow the tool name.
pub fn encode_invocation(name: &str, params: &Map<String, Value>) -> Option<String> {
    let mut line = String::with_capacity(32 + params.len() * 16);
    line.push_str("{\"tool\":");
    line.push_str(&serde_json::to_string(name).ok()?);

    for (key, value) in params {
        if key == "tool" {
            continue;
        }
        let scalar = match value {
            Value::Array(_) | Value::Object(_) => {
                debug!(tool = name, param = %key, "nested parameter value, skipping invocation");
                return None;
            }
            other => serde_json::to_string(other).ok()?,
        };
        line.push(',');
        line.push_str(&serde_json::to_string(key).ok()?);
        line.push(':');
        line.push_str(&scalar);
    }

    line.push_str("}\n");
    Some(line)
}
