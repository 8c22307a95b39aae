//! AI engine for Easel.
//!
//! Provides:
//! - the Claude Messages API client behind the [`AiClient`] trait
//! - the codec bridge that turns a tool-calling response into canvas wire
//!   lines and display text
//! - conversation history and token usage tracking
//! - the single-pending-result staging protocol between the network worker
//!   and the UI loop

pub mod claude;
pub mod codec;
pub mod session;
pub mod staging;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use claude::{AuthMethod, ClaudeClient, ClaudeConfig};
pub use codec::{
    encode_invocation, extract_response, ByteRange, CodecError, ExtractReport, OutputBuffer,
};
pub use session::Session;
pub use staging::{
    Applied, DispatchError, PendingResult, RequestMode, SlotState, StagingBuffers, StagingSlot,
    Waker,
};
pub use token_tracker::TokenTracker;
pub use tools::{draw_tools, to_claude_tool};

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send the conversation and return the parsed response body.
    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<serde_json::Value, AiError>;

    /// Provider name used for usage accounting.
    fn provider(&self) -> &str {
        "claude"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Read the `usage` block of a Messages API response.
    pub fn from_response(body: &serde_json::Value) -> Self {
        Self {
            input_tokens: body["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: body["usage"]["output_tokens"].as_u64().unwrap_or(0),
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Response contained no usable content")]
    NoContent,
}

impl AiError {
    /// Short fixed message shown to the user in place of the full error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AiError::ApiError(_) => "The AI service returned an error.",
            AiError::RateLimited => "Rate limited. Wait a moment and try again.",
            AiError::NetworkError(_) => "Could not reach the AI service.",
            AiError::ParseError(_) => "Could not understand the AI response.",
            AiError::Timeout => "The request timed out.",
            AiError::NoContent => "The AI returned an empty response.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usage_is_read_from_response_body() {
        let body = json!({"usage": {"input_tokens": 120, "output_tokens": 30}});
        let usage = TokenUsage::from_response(&body);
        assert_eq!(usage.input_tokens, 120);
        assert_eq!(usage.total_tokens(), 150);
    }

    #[test]
    fn missing_usage_counts_as_zero() {
        assert_eq!(TokenUsage::from_response(&json!({})), TokenUsage::default());
    }

    #[test]
    fn every_error_has_a_user_message() {
        let errors = [
            AiError::ApiError("HTTP 500".into()),
            AiError::RateLimited,
            AiError::NetworkError("dns".into()),
            AiError::ParseError("eof".into()),
            AiError::Timeout,
            AiError::NoContent,
        ];
        for err in &errors {
            assert!(!err.user_message().is_empty());
            // the static message never leaks the detail string
            assert!(!err.user_message().contains("HTTP 500"));
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = Message::user("hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "user");
    }
}
