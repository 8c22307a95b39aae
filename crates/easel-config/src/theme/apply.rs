//! Theme merging.
//!
//! A palette is built in layers: the default palette, then the theme's
//! overrides, then every role the user changed in `[colors]`.

use super::types::{ThemeColorOverrides, ThemeOverrides};
use crate::schema::ColorConfig;

/// Produce the palette `theme` yields for a user whose `[colors]` section
/// is `user`. Roles the user changed from the default win over the theme.
pub fn themed_palette(user: &ColorConfig, theme: &ThemeOverrides) -> ColorConfig {
    let mut palette = ColorConfig::default();
    if let Some(ref colors) = theme.colors {
        apply_color_overrides(&mut palette, colors);
    }
    apply_color_overrides(&mut palette, &user_overrides(user));
    palette
}

/// Roles of `user` that differ from the default palette.
fn user_overrides(user: &ColorConfig) -> ThemeColorOverrides {
    let defaults = ColorConfig::default();
    let changed = |value: &String, default: &String| (value != default).then(|| value.clone());
    ThemeColorOverrides {
        primary: changed(&user.primary, &defaults.primary),
        secondary: changed(&user.secondary, &defaults.secondary),
        accent: changed(&user.accent, &defaults.accent),
        background: changed(&user.background, &defaults.background),
        surface: changed(&user.surface, &defaults.surface),
        text: changed(&user.text, &defaults.text),
        text_muted: changed(&user.text_muted, &defaults.text_muted),
        border: changed(&user.border, &defaults.border),
        success: changed(&user.success, &defaults.success),
        warning: changed(&user.warning, &defaults.warning),
        danger: changed(&user.danger, &defaults.danger),
    }
}

fn apply_color_overrides(target: &mut ColorConfig, source: &ThemeColorOverrides) {
    let pairs: [(&mut String, &Option<String>); 11] = [
        (&mut target.primary, &source.primary),
        (&mut target.secondary, &source.secondary),
        (&mut target.accent, &source.accent),
        (&mut target.background, &source.background),
        (&mut target.surface, &source.surface),
        (&mut target.text, &source.text),
        (&mut target.text_muted, &source.text_muted),
        (&mut target.border, &source.border),
        (&mut target.success, &source.success),
        (&mut target.warning, &source.warning),
        (&mut target.danger, &source.danger),
    ];
    for (slot, value) in pairs {
        if let Some(v) = value {
            *slot = v.clone();
        }
    }
}
