//! Theme file resolution and loading.
//!
//! Resolves theme names to filesystem paths and parses YAML theme files
//! into [`ThemeOverrides`].

use super::types::{easel_light, ThemeOverrides};
use easel_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolve the filesystem path for a custom theme by name.
///
/// If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`), it is used directly. Otherwise `resources/themes/`
/// next to the executable, in the working directory, and in the config
/// directory are searched in that order.
fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let file = format!("{name}.yaml");

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let theme_path = exe_dir.join("resources").join("themes").join(&file);
            if theme_path.exists() {
                return Ok(theme_path);
            }
        }
    }

    let local_path = PathBuf::from("resources").join("themes").join(&file);
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_theme = config_dir.join("easel").join("themes").join(&file);
        if config_theme.exists() {
            return Ok(config_theme);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

/// Load a theme by name.
///
/// `easel-dark` is the default palette and yields empty overrides;
/// `easel-light` is compiled in. Any other name is read from YAML.
pub fn load_theme(name: &str) -> Result<ThemeOverrides, ConfigError> {
    match name {
        "easel-dark" => Ok(ThemeOverrides {
            name: Some("easel-dark".into()),
            ..Default::default()
        }),
        "easel-light" => Ok(easel_light()),
        _ => {
            let path = resolve_theme_path(name)?;
            load_theme_from_path(&path)
        }
    }
}

/// Load a theme from a specific filesystem path.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: ThemeOverrides = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse theme YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
