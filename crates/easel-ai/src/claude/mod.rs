//! Anthropic Claude API client.
//!
//! Implements the `AiClient` trait via the Anthropic Messages API
//! (https://api.anthropic.com/v1/messages). The response body is returned
//! unparsed so the codec bridge can walk its `content` array.

mod api;
mod client;
mod config;

pub use client::ClaudeClient;
pub use config::{AuthMethod, ClaudeConfig};
