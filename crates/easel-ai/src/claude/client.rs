//! Claude API client struct and request building.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::tools::to_claude_tool;
use crate::{AiError, Message, Role, ToolDefinition};

use super::config::{AuthMethod, ClaudeConfig};

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| AiError::NetworkError(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClaudeConfig {
        &self.config
    }

    /// Build auth headers for the configured auth method.
    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, AiError> {
        let invalid =
            |_| AiError::ApiError("credentials contain invalid header characters".into());
        let mut headers = HeaderMap::new();
        match self.config.auth_method {
            AuthMethod::ApiKey => {
                let key = HeaderValue::from_str(&self.config.token).map_err(invalid)?;
                headers.insert("x-api-key", key);
            }
            AuthMethod::OAuth => {
                let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.token))
                    .map_err(invalid)?;
                headers.insert("authorization", bearer);
            }
        }
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        Ok(headers)
    }

    /// Build the JSON request body for the Messages API.
    ///
    /// System messages are lifted into the top-level `system` field.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> serde_json::Value {
        let mut msgs = Vec::new();
        let mut system: Vec<&str> = Vec::new();
        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => {
                    system.push(&msg.content);
                    continue;
                }
            };
            msgs.push(serde_json::json!({
                "role": role,
                "content": msg.content,
            }));
        }

        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": msgs,
        });

        if !system.is_empty() {
            body["system"] = serde_json::json!(system.join("\n\n"));
        }

        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_claude_tool).collect();
            body["tools"] = serde_json::json!(tool_defs);
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::draw_tools;

    fn client(auth: AuthMethod) -> ClaudeClient {
        ClaudeClient::new(ClaudeConfig::new("token-123", auth)).unwrap()
    }

    #[test]
    fn system_messages_are_lifted() {
        let body = client(AuthMethod::ApiKey).build_request_body(
            &[
                Message::system("draw things"),
                Message::user("a house"),
                Message::assistant("ok"),
            ],
            &[],
        );
        assert_eq!(body["system"], "draw things");
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0]["role"], "user");
        assert_eq!(msgs[1]["role"], "assistant");
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn draw_tools_are_sent_with_input_schema() {
        let body = client(AuthMethod::ApiKey)
            .build_request_body(&[Message::user("a sun")], draw_tools());
        let tools = body["tools"].as_array().unwrap();
        assert_eq!(tools.len(), draw_tools().len());
        assert_eq!(tools[0]["name"], "fill_rect");
        assert_eq!(tools[0]["input_schema"]["type"], "object");
    }

    #[test]
    fn auth_headers_follow_method() {
        let headers = client(AuthMethod::ApiKey).auth_headers().unwrap();
        assert_eq!(headers["x-api-key"], "token-123");
        assert!(headers.get("authorization").is_none());

        let headers = client(AuthMethod::OAuth).auth_headers().unwrap();
        assert_eq!(headers["authorization"], "Bearer token-123");
        assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
    }

    #[test]
    fn header_injection_is_rejected() {
        let bad = ClaudeClient::new(ClaudeConfig::new("a\nb", AuthMethod::ApiKey)).unwrap();
        assert!(bad.auth_headers().is_err());
    }
}
