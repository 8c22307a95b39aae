//! Full configuration validation.
//!
//! Validates numeric ranges and palette color formats. Each domain has
//! its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod ai;
mod canvas;
mod colors;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::EaselConfig;
use easel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EaselConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    ai::validate_ai(&mut errors, config);
    canvas::validate_canvas(&mut errors, config);
    colors::validate_palette(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
