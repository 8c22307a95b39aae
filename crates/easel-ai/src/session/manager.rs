//! Session struct and history management.

use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{Message, Role, TokenUsage};

/// A conversation session with bounded message history.
pub struct Session {
    /// Committed history, oldest first.
    messages: Vec<Message>,
    /// System prompt used when a request does not supply its own.
    system_prompt: Option<String>,
    /// Token usage tracker.
    tracker: TokenTracker,
    /// Maximum number of history messages kept.
    max_history: usize,
    /// Provider name for token tracking.
    provider: String,
}

impl Session {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            tracker: TokenTracker::new(),
            max_history: 40,
            provider: provider.into(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max.max(2);
        self
    }

    /// Commit a completed exchange.
    pub fn record_turn(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.messages.push(Message::user(user));
        self.messages.push(Message::assistant(assistant));
        self.trim();
    }

    pub fn record_usage(&mut self, usage: &TokenUsage) {
        self.tracker.record(&self.provider, usage);
    }

    /// Snapshot for a new request: the history plus the pending user turn.
    /// `system` replaces the session's own system prompt when given.
    pub fn request_messages(&self, user: &str, system: Option<&str>) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 2);
        if let Some(system) = system.or(self.system_prompt.as_deref()) {
            msgs.push(Message::system(system));
        }
        msgs.extend(self.messages.iter().cloned());
        msgs.push(Message::user(user));
        msgs
    }

    /// Drop the oldest messages until the history fits, never leaving an
    /// assistant message at the front.
    fn trim(&mut self) {
        let mut cut = self.messages.len().saturating_sub(self.max_history);
        if cut == 0 {
            return;
        }
        while self
            .messages
            .get(cut)
            .is_some_and(|m| m.role == Role::Assistant)
        {
            cut += 1;
        }
        debug!(dropped = cut, "trimming session history");
        self.messages.drain(..cut);
    }

    /// Get the committed conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Clear conversation history. Usage totals are kept.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("claude")
    }
}
