//! Color tokens and theme resolution.
//!
//! A draw command carries a [`ColorToken`], never a resolved color. The
//! token is resolved against whichever [`Theme`] is active when the canvas
//! is replayed, so a theme swap recolors semantic roles on the next frame
//! without touching the command data.

use easel_common::Color;

/// Named color roles the assistant may paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextMuted,
    Border,
    Success,
    Warning,
    Danger,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 11] = [
        SemanticColor::Primary,
        SemanticColor::Secondary,
        SemanticColor::Accent,
        SemanticColor::Background,
        SemanticColor::Surface,
        SemanticColor::Text,
        SemanticColor::TextMuted,
        SemanticColor::Border,
        SemanticColor::Success,
        SemanticColor::Warning,
        SemanticColor::Danger,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Wire name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            SemanticColor::Primary => "primary",
            SemanticColor::Secondary => "secondary",
            SemanticColor::Accent => "accent",
            SemanticColor::Background => "background",
            SemanticColor::Surface => "surface",
            SemanticColor::Text => "text",
            SemanticColor::TextMuted => "text_muted",
            SemanticColor::Border => "border",
            SemanticColor::Success => "success",
            SemanticColor::Warning => "warning",
            SemanticColor::Danger => "danger",
        }
    }

    /// Look up a role by wire name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name().eq_ignore_ascii_case(name))
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Per-command color: a literal RGB value or a semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Hex(Color),
    Semantic(SemanticColor),
}

impl ColorToken {
    /// Parse a wire color: six hex digits (optionally `#`-prefixed) or a
    /// semantic role name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(role) = SemanticColor::from_name(s) {
            return Some(ColorToken::Semantic(role));
        }
        Color::from_rgb_digits(s.strip_prefix('#').unwrap_or(s)).map(ColorToken::Hex)
    }

    /// Wire form: uppercase hex digits without `#`, or the role name.
    pub fn to_wire(&self) -> String {
        match self {
            ColorToken::Hex(c) => c.to_rgb_digits(),
            ColorToken::Semantic(role) => role.name().to_string(),
        }
    }
}

/// A resolved palette: one concrete color per semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    colors: [Color; SemanticColor::COUNT],
}

impl Theme {
    /// Build a theme by asking `color_for` for every role.
    pub fn from_fn(
        name: impl Into<String>,
        mut color_for: impl FnMut(SemanticColor) -> Color,
    ) -> Self {
        let mut colors = [Color::BLACK; SemanticColor::COUNT];
        for role in SemanticColor::ALL {
            colors[role.index()] = color_for(role);
        }
        Self {
            name: name.into(),
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self, role: SemanticColor) -> Color {
        self.colors[role.index()]
    }

    pub fn set(&mut self, role: SemanticColor, color: Color) {
        self.colors[role.index()] = color;
    }

    pub fn resolve(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Hex(c) => c,
            ColorToken::Semantic(role) => self.color(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_names_round_trip() {
        for role in SemanticColor::ALL {
            assert_eq!(SemanticColor::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn semantic_lookup_ignores_case() {
        assert_eq!(
            SemanticColor::from_name("Primary"),
            Some(SemanticColor::Primary)
        );
        assert_eq!(SemanticColor::from_name("purple"), None);
    }

    #[test]
    fn parse_hex_and_semantic_tokens() {
        assert_eq!(
            ColorToken::parse("FF0000"),
            Some(ColorToken::Hex(Color::from_rgba(255, 0, 0, 255)))
        );
        assert_eq!(
            ColorToken::parse("#00ff00"),
            Some(ColorToken::Hex(Color::from_rgba(0, 255, 0, 255)))
        );
        assert_eq!(
            ColorToken::parse("danger"),
            Some(ColorToken::Semantic(SemanticColor::Danger))
        );
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert_eq!(ColorToken::parse("F00"), None);
        assert_eq!(ColorToken::parse("FF000080"), None);
        assert_eq!(ColorToken::parse("red"), None);
        assert_eq!(ColorToken::parse(""), None);
    }

    #[test]
    fn wire_form_is_canonical() {
        assert_eq!(ColorToken::parse("#abcdef").unwrap().to_wire(), "ABCDEF");
        assert_eq!(ColorToken::parse("TEXT_MUTED").unwrap().to_wire(), "text_muted");
    }

    #[test]
    fn theme_resolves_semantic_roles_only() {
        let mut theme = Theme::from_fn("t", |_| Color::WHITE);
        theme.set(SemanticColor::Danger, Color::from_rgba(200, 0, 0, 255));

        let red = Color::from_rgba(200, 0, 0, 255);
        assert_eq!(theme.resolve(ColorToken::Semantic(SemanticColor::Danger)), red);
        assert_eq!(
            theme.resolve(ColorToken::Semantic(SemanticColor::Primary)),
            Color::WHITE
        );
        let literal = Color::from_rgba(1, 2, 3, 255);
        assert_eq!(theme.resolve(ColorToken::Hex(literal)), literal);
    }
}
