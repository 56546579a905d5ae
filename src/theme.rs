use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two visual modes of the page. There is deliberately no third member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl Theme {
    /// The only transition in the state machine, in both directions.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase wire form, also the persisted store value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Capitalized form for mode-label surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Glyph for toggle controls. Shows the mode the control switches *to*,
    /// not the current one: a moon on a light page, a sun on a dark one.
    /// Intentional affordance inversion; do not "fix".
    pub fn action_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Exact live-region text emitted after a toggle lands on `self`.
    pub fn announcement(self) -> String {
        format!("Theme changed to {} mode", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn parse_accepts_exact_lowercase_names_only() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        for bad in ["Dark", "LIGHT", "auto", "", "darkness"] {
            assert!(bad.parse::<Theme>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn action_glyph_shows_the_target_mode() {
        // Moon while light, sun while dark.
        assert_eq!(Theme::Light.action_glyph(), "🌙");
        assert_eq!(Theme::Dark.action_glyph(), "☀️");
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(Theme::Light.label(), "Light");
        assert_eq!(Theme::Dark.label(), "Dark");
    }

    #[test]
    fn announcement_text_is_exact() {
        assert_eq!(Theme::Dark.announcement(), "Theme changed to dark mode");
        assert_eq!(Theme::Light.announcement(), "Theme changed to light mode");
    }
}
