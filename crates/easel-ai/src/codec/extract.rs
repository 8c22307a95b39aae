//! Response extraction into wire lines and display text.

use serde_json::Value;
use tracing::debug;

use super::buffer::{ByteRange, OutputBuffer};
use super::encode::encode_invocation;
use super::CodecError;

/// What one call to [`extract_response`] wrote and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Wire lines written by this call.
    pub wire_range: ByteRange,
    /// Display text written by this call.
    pub text_range: ByteRange,
    /// Tool invocations written as wire lines.
    pub tool_blocks: usize,
    /// Text blocks written.
    pub text_blocks: usize,
    /// Blocks of unknown shape, or invocations that could not be encoded.
    pub skipped: usize,
    /// Blocks that did not fit in their output buffer.
    pub dropped: usize,
    /// Blocks past the element cap that were never examined.
    pub truncated: usize,
}

impl ExtractReport {
    pub fn is_empty(&self) -> bool {
        self.tool_blocks == 0 && self.text_blocks == 0
    }
}

enum Block<'a> {
    Tool {
        name: &'a str,
        input: &'a serde_json::Map<String, Value>,
    },
    Text(&'a str),
}

fn classify(block: &Value) -> Option<Block<'_>> {
    if let (Some(name), Some(input)) = (
        block.get("name").and_then(Value::as_str),
        block.get("input").and_then(Value::as_object),
    ) {
        return Some(Block::Tool { name, input });
    }
    block.get("text").and_then(Value::as_str).map(Block::Text)
}

/// Walk `body["content"]`, appending wire lines to `wires` and text to
/// `text`.
///
/// At most `max_blocks` elements are examined. Text blocks are joined with
/// a single newline. A line or text chunk that does not fit is dropped and
/// later blocks are still attempted.
pub fn extract_response(
    body: &Value,
    wires: &mut OutputBuffer,
    text: &mut OutputBuffer,
    max_blocks: usize,
) -> Result<ExtractReport, CodecError> {
    let content = body
        .get("content")
        .and_then(Value::as_array)
        .ok_or(CodecError::MissingContent)?;

    let wire_start = wires.len();
    let text_start = text.len();
    let mut report = ExtractReport {
        truncated: content.len().saturating_sub(max_blocks),
        ..ExtractReport::default()
    };

    for (index, block) in content.iter().take(max_blocks).enumerate() {
        match classify(block) {
            Some(Block::Tool { name, input }) => {
                let Some(line) = encode_invocation(name, input) else {
                    report.skipped += 1;
                    continue;
                };
                if wires.try_push(&line).is_some() {
                    report.tool_blocks += 1;
                } else {
                    debug!(index, tool = name, "wire buffer full, dropping invocation");
                    report.dropped += 1;
                }
            }
            Some(Block::Text(chunk)) => {
                let pushed = if report.text_blocks == 0 {
                    text.try_push(chunk)
                } else {
                    text.try_push(&format!("\n{chunk}"))
                };
                if pushed.is_some() {
                    report.text_blocks += 1;
                } else {
                    debug!(index, len = chunk.len(), "text buffer full, dropping block");
                    report.dropped += 1;
                }
            }
            None => {
                debug!(index, "unrecognized content block");
                report.skipped += 1;
            }
        }
    }

    if report.truncated > 0 {
        debug!(
            truncated = report.truncated,
            max_blocks, "content block cap reached"
        );
    }

    report.wire_range = ByteRange::between(wire_start, wires.len());
    report.text_range = ByteRange::between(text_start, text.len());
    Ok(report)
}
