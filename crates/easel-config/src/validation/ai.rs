//! Validation for the `[ai]` section.

use crate::schema::EaselConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_ai(errors: &mut Vec<String>, config: &EaselConfig) {
    let ai = &config.ai;
    if ai.model.trim().is_empty() {
        errors.push("ai.model must not be empty".into());
    }
    validate_range(errors, "ai.max_tokens", ai.max_tokens, 256, 32768);
    validate_range_f64(errors, "ai.temperature", ai.temperature, 0.0, 1.0);
    validate_range(errors, "ai.timeout_secs", ai.timeout_secs, 5, 600);
    validate_range(errors, "ai.max_history", ai.max_history, 2, 200);
}
