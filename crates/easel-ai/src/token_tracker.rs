//! Token usage accounting across requests.

use std::collections::HashMap;

use crate::TokenUsage;

/// Cumulative token usage, in total and per provider.
pub struct TokenTracker {
    total: TokenUsage,
    by_provider: HashMap<String, TokenUsage>,
    last: Option<TokenUsage>,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            by_provider: HashMap::new(),
            last: None,
            call_count: 0,
        }
    }

    /// Record token usage from one API call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        add(&mut self.total, usage);
        add(self.by_provider.entry(provider.to_string()).or_default(), usage);
        self.last = Some(*usage);
        self.call_count += 1;
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    /// Usage of the most recent call.
    pub fn last(&self) -> Option<&TokenUsage> {
        self.last.as_ref()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// One-line summary for display.
    pub fn summary(&self) -> String {
        format!(
            "{} requests, {} input + {} output = {} tokens",
            self.call_count,
            self.total.input_tokens,
            self.total.output_tokens,
            self.total_tokens()
        )
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn add(into: &mut TokenUsage, usage: &TokenUsage) {
    into.input_tokens = into.input_tokens.saturating_add(usage.input_tokens);
    into.output_tokens = into.output_tokens.saturating_add(usage.output_tokens);
}
