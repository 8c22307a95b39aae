//! Easel configuration system.
//!
//! Provides TOML-based configuration with theme support and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use easel_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("theme: {}", config.theme.name);
//! ```

pub mod colors;
pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{EaselConfig, CONFIG_SCHEMA_VERSION};
pub use theme::{ThemeOverrides, BUILT_IN_THEMES};

use easel_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing default config is created from the commented template.
/// `[colors]` is returned as the user wrote it; themes are layered on top
/// by [`theme::themed_palette`].
pub fn load_config(path: Option<&Path>) -> Result<EaselConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_keeps_user_colors_unthemed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[theme]\nname = \"easel-light\"\n\n[colors]\nprimary = \"#ff0000\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.theme.name, "easel-light");
        assert_eq!(config.colors.primary, "#ff0000");
        assert_eq!(config.colors.background, "#0b0e14");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[canvas]\nmax_commands = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
