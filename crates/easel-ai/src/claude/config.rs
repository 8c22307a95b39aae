//! Claude API client configuration.

use std::fmt;

use crate::AiError;

/// How the client authenticates with the Claude API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Anthropic API key (`x-api-key` header).
    ApiKey,
    /// OAuth Bearer token (`Authorization: Bearer`).
    OAuth,
}

/// Claude API client configuration.
#[derive(Clone)]
pub struct ClaudeConfig {
    pub token: String,
    pub auth_method: AuthMethod,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("auth_method", &self.auth_method)
            .field("token", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClaudeConfig {
    pub fn new(token: impl Into<String>, auth_method: AuthMethod) -> Self {
        Self {
            token: token.into(),
            auth_method,
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }

    /// Create config from the environment or stored CLI credentials.
    ///
    /// Resolution order:
    /// 1. `ANTHROPIC_API_KEY` env var (API key auth)
    /// 2. `CLAUDE_CODE_OAUTH_TOKEN` env var (OAuth auth)
    /// 3. `~/.claude/.credentials.json` (OAuth)
    pub fn from_env() -> Result<Self, AiError> {
        if let Some(key) = non_empty_var("ANTHROPIC_API_KEY") {
            return Ok(Self::new(key, AuthMethod::ApiKey));
        }

        if let Some(token) = non_empty_var("CLAUDE_CODE_OAUTH_TOKEN") {
            return Ok(Self::new(token, AuthMethod::OAuth));
        }

        if let Some(token) = Self::read_stored_credentials() {
            return Ok(Self::new(token, AuthMethod::OAuth));
        }

        Err(AiError::ApiError(
            "Claude API not configured. Set ANTHROPIC_API_KEY or CLAUDE_CODE_OAUTH_TOKEN."
                .into(),
        ))
    }

    /// Read the OAuth access token from `~/.claude/.credentials.json`.
    fn read_stored_credentials() -> Option<String> {
        let path = dirs::home_dir()?.join(".claude").join(".credentials.json");
        let data = std::fs::read_to_string(&path).ok()?;
        parse_credentials(&data)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_credentials(data: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(data).ok()?;
    json.get("claudeAiOauth")?
        .get("accessToken")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let config = ClaudeConfig::new("sk-secret", AuthMethod::ApiKey);
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = ClaudeConfig::new("t", AuthMethod::OAuth)
            .with_model("claude-haiku")
            .with_max_tokens(512)
            .with_temperature(0.2)
            .with_timeout_secs(5);
        assert_eq!(config.model, "claude-haiku");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn credentials_file_token_is_extracted() {
        let data = r#"{"claudeAiOauth":{"accessToken":"abc","refreshToken":"def"}}"#;
        assert_eq!(parse_credentials(data).as_deref(), Some("abc"));
        assert_eq!(parse_credentials(r#"{"other":{}}"#), None);
        assert_eq!(parse_credentials("not json"), None);
    }
}
