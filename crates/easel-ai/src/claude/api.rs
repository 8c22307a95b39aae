//! AiClient trait implementation for ClaudeClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{AiClient, AiError, Message, ToolDefinition};

use super::client::{ClaudeClient, ANTHROPIC_API_URL};

#[async_trait]
impl AiClient for ClaudeClient {
    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<serde_json::Value, AiError> {
        let body = self.build_request_body(messages, tools);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            tools = tools.len(),
            "Claude API request"
        );

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .headers(self.auth_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Claude API rate limited");
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| AiError::ParseError(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
