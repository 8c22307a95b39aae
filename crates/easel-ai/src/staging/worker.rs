//! The background half of a request.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::codec::extract_response;
use crate::{AiClient, AiError, Message, TokenUsage};

use super::result::{PendingResult, RequestMode, StagingBuffers};

/// Everything a worker hands back to the UI thread.
pub(crate) struct Staged {
    pub result: PendingResult,
    pub buffers: StagingBuffers,
    pub usage: Option<TokenUsage>,
}

/// Run one request to completion. Always produces a result.
pub(crate) async fn run_request(
    client: Arc<dyn AiClient>,
    messages: Vec<Message>,
    mode: RequestMode,
    mut buffers: StagingBuffers,
    max_blocks: usize,
) -> Staged {
    let body = match client.send_message(&messages, mode.tools()).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, mode = mode.name(), "request failed");
            return Staged {
                result: PendingResult::Error(e.user_message()),
                buffers,
                usage: None,
            };
        }
    };

    let usage = TokenUsage::from_response(&body);
    let result = match stage_response(&body, mode, &mut buffers, max_blocks) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, mode = mode.name(), "response could not be staged");
            PendingResult::Error(e.user_message())
        }
    };

    Staged {
        result,
        buffers,
        usage: Some(usage),
    }
}

/// Extract a response body into `buffers` and describe what was staged.
pub(crate) fn stage_response(
    body: &serde_json::Value,
    mode: RequestMode,
    buffers: &mut StagingBuffers,
    max_blocks: usize,
) -> Result<PendingResult, AiError> {
    buffers.clear();
    let report = extract_response(body, &mut buffers.wires, &mut buffers.text, max_blocks)
        .map_err(|e| AiError::ParseError(e.to_string()))?;

    if report.skipped + report.dropped + report.truncated > 0 {
        debug!(
            skipped = report.skipped,
            dropped = report.dropped,
            truncated = report.truncated,
            "content blocks not staged"
        );
    }

    match mode {
        RequestMode::Chat if report.text_blocks == 0 => Err(AiError::NoContent),
        RequestMode::Chat => Ok(PendingResult::Success(report.text_range)),
        RequestMode::Draw if report.is_empty() => Err(AiError::NoContent),
        RequestMode::Draw => {
            info!(
                tools = report.tool_blocks,
                text_blocks = report.text_blocks,
                "drawing staged"
            );
            Ok(PendingResult::Canvas {
                wires: report.wire_range,
                text: report.text_range,
            })
        }
    }
}
