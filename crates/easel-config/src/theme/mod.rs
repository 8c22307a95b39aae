//! Theme loading and merging.
//!
//! Themes override subsets of the color palette. `easel-dark` and
//! `easel-light` are built in; other themes are YAML files.

mod apply;
mod loader;
mod types;

pub use apply::themed_palette;
pub use loader::{load_theme, load_theme_from_path};
pub use types::{ThemeColorOverrides, ThemeOverrides, BUILT_IN_THEMES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColorConfig;

    #[test]
    fn load_easel_dark_returns_default() {
        let theme = load_theme("easel-dark").unwrap();
        assert_eq!(theme.name, Some("easel-dark".into()));
        assert!(theme.colors.is_none());
    }

    #[test]
    fn built_in_themes_list_has_expected_entries() {
        assert!(BUILT_IN_THEMES.contains(&"easel-dark"));
        assert!(BUILT_IN_THEMES.contains(&"easel-light"));
        assert_eq!(BUILT_IN_THEMES.len(), 2);
    }

    #[test]
    fn light_theme_overrides_every_role() {
        let palette = themed_palette(&ColorConfig::default(), &load_theme("easel-light").unwrap());
        let default = ColorConfig::default();
        for ((role, light), (_, dark)) in palette.entries().iter().zip(default.entries().iter()) {
            assert_ne!(light, dark, "role {role} should differ between themes");
        }
    }

    #[test]
    fn partial_theme_keeps_default_for_other_roles() {
        let theme = ThemeOverrides {
            colors: Some(ThemeColorOverrides {
                primary: Some("#ff00ff".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let palette = themed_palette(&ColorConfig::default(), &theme);
        assert_eq!(palette.primary, "#ff00ff");
        assert_eq!(palette.danger, ColorConfig::default().danger);
    }

    #[test]
    fn empty_theme_yields_user_palette() {
        let user = ColorConfig {
            accent: "#123456".into(),
            ..ColorConfig::default()
        };
        assert_eq!(themed_palette(&user, &ThemeOverrides::default()), user);
    }

    #[test]
    fn user_colors_win_over_theme() {
        let user = ColorConfig {
            primary: "#ff0000".into(),
            ..ColorConfig::default()
        };
        let light = load_theme("easel-light").unwrap();

        let palette = themed_palette(&user, &light);
        assert_eq!(palette.primary, "#ff0000");
        assert_eq!(palette.background, "#fafafa");
    }

    #[test]
    fn load_theme_from_yaml_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-theme.yaml");
        std::fs::write(
            &path,
            r##"
name: test-theme
colors:
  primary: "#ff00ff"
  surface: "#111111"
"##,
        )
        .unwrap();

        let theme = load_theme_from_path(&path).unwrap();
        assert_eq!(theme.name, Some("test-theme".into()));
        let colors = theme.colors.as_ref().unwrap();
        assert_eq!(colors.primary.as_deref(), Some("#ff00ff"));
        assert_eq!(colors.surface.as_deref(), Some("#111111"));
        assert!(colors.danger.is_none());
    }

    #[test]
    fn load_theme_by_path_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.yaml");
        std::fs::write(&path, "colors:\n  danger: \"#990000\"\n").unwrap();

        let theme = load_theme(path.to_str().unwrap()).unwrap();
        assert_eq!(
            theme.colors.unwrap().danger.as_deref(),
            Some("#990000")
        );
    }

    #[test]
    fn nonexistent_theme_returns_error() {
        let result = load_theme("definitely-not-a-real-theme-name");
        assert!(result.is_err());
    }
}
