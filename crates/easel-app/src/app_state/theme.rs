//! Building canvas themes from the configured palettes.

use std::sync::Arc;

use easel_canvas::Theme;
use easel_common::Color;
use easel_config::colors::parse_color;
use easel_config::schema::{ColorConfig, EaselConfig};
use easel_config::theme::{load_theme, themed_palette, ThemeOverrides, BUILT_IN_THEMES};
use tracing::warn;

/// The active theme and the one `/theme` swaps in.
pub(super) struct ThemePair {
    active: Arc<Theme>,
    inactive: Arc<Theme>,
}

impl ThemePair {
    /// Primary theme from `[theme] name` (or `name_override`), alternate
    /// from `[theme] alternate`. Both are layered under the user's
    /// `[colors]`.
    pub(super) fn from_config(config: &EaselConfig, name_override: Option<&str>) -> Self {
        let primary = name_override.unwrap_or(config.theme.name.as_str());
        let alternate = alternate_name(primary, &config.theme.alternate);
        let active = theme_from_palette(primary, &palette_for(primary, &config.colors));
        let inactive = theme_from_palette(alternate, &palette_for(alternate, &config.colors));
        Self {
            active: Arc::new(active),
            inactive: Arc::new(inactive),
        }
    }

    pub(super) fn active(&self) -> &Arc<Theme> {
        &self.active
    }

    /// Swap active and alternate; returns the newly active theme.
    pub(super) fn toggle(&mut self) -> Arc<Theme> {
        std::mem::swap(&mut self.active, &mut self.inactive);
        Arc::clone(&self.active)
    }
}

/// `alternate`, unless it names the primary theme; then the first other
/// built-in theme.
fn alternate_name<'a>(primary: &str, alternate: &'a str) -> &'a str {
    if alternate != primary {
        return alternate;
    }
    BUILT_IN_THEMES
        .iter()
        .copied()
        .find(|name| *name != primary)
        .unwrap_or(alternate)
}

/// The user's palette with the named theme layered underneath.
fn palette_for(name: &str, user: &ColorConfig) -> ColorConfig {
    match load_theme(name) {
        Ok(overrides) => themed_palette(user, &overrides),
        Err(e) => {
            warn!("failed to load theme '{name}': {e}");
            themed_palette(user, &ThemeOverrides::default())
        }
    }
}

/// Resolve every semantic role of `palette` to a concrete color.
pub(super) fn theme_from_palette(name: &str, palette: &ColorConfig) -> Theme {
    let entries = palette.entries();
    Theme::from_fn(name, |role| {
        let value = entries
            .iter()
            .find(|(key, _)| *key == role.name())
            .map(|(_, value)| *value)
            .unwrap_or_default();
        parse_color(value).unwrap_or_else(|e| {
            warn!(role = role.name(), "invalid palette color: {e}");
            Color::BLACK
        })
    })
}
