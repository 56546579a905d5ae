use ratatui::style::{Color, Modifier, Style};

use crate::theme::Theme;

/// Ratatui styles derived from the root theme attribute. The palette is the
/// terminal rendition of the page's `data-theme` styling rules.
#[derive(Debug, Clone)]
pub struct Palette {
    #[allow(dead_code)] // read from tests only; rendering shows the root attribute
    pub name: &'static str,
    pub header_style: Style,
    pub body_style: Style,
    pub accent_style: Style,
    pub control_style: Style,
    pub menu_style: Style,
    pub footer_style: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            header_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            body_style: Style::default().fg(Color::White),
            accent_style: Style::default().fg(Color::LightCyan),
            control_style: Style::default().fg(Color::Yellow),
            menu_style: Style::default().bg(Color::DarkGray).fg(Color::White),
            footer_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            header_style: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            body_style: Style::default().fg(Color::Black),
            accent_style: Style::default().fg(Color::Magenta),
            control_style: Style::default().fg(Color::Blue),
            menu_style: Style::default().bg(Color::Gray).fg(Color::Black),
            footer_style: Style::default().fg(Color::DarkGray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_the_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark).name, "dark");
        assert_eq!(Palette::for_theme(Theme::Light).name, "light");
    }
}
