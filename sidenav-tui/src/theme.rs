//! Color theme for sidenav TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles needed to render the sidebar, the main
/// panel and the header/footer chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,

    // Sidebar
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,

    // Buttons
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_focus: Color,
    pub button_hover: Color,

    // Chrome
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Creates the default sidenav theme.
///
/// - Dark grey sidebar (#333333) with white text
/// - Buttons on #444444, #555555 when focused, orange under the mouse
pub fn sidenav_default() -> Theme {
    let fg = Color::Rgb(224, 224, 224); // #e0e0e0

    Theme {
        name: "sidenav".into(),

        bg: Color::Rgb(30, 30, 30), // #1e1e1e
        fg,
        accent: Color::Rgb(255, 165, 0), // #ffa500 orange

        sidebar_bg: Color::Rgb(51, 51, 51), // #333333
        sidebar_fg: Color::White,

        button_bg: Color::Rgb(68, 68, 68),    // #444444
        button_fg: Color::White,
        button_focus: Color::Rgb(85, 85, 85), // #555555
        button_hover: Color::Rgb(255, 165, 0), // #ffa500 orange

        border: Color::Rgb(85, 85, 85),      // #555555
        header_bg: Color::Rgb(0, 95, 135),   // #005f87
        header_fg: Color::White,

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidenav_default_has_correct_name() {
        let theme = sidenav_default();
        assert_eq!(theme.name, "sidenav");
    }

    #[test]
    fn sidebar_uses_dark_grey_with_white_text() {
        let theme = sidenav_default();
        assert_eq!(theme.sidebar_bg, Color::Rgb(51, 51, 51));
        assert_eq!(theme.sidebar_fg, Color::White);
    }

    #[test]
    fn button_states_are_distinct() {
        let theme = sidenav_default();
        assert_ne!(theme.button_bg, theme.button_focus);
        assert_ne!(theme.button_focus, theme.button_hover);
        assert_eq!(theme.button_hover, theme.accent);
    }

    #[test]
    fn theme_is_clone() {
        let theme = sidenav_default();
        let cloned = theme.clone();
        assert_eq!(theme.name, cloned.name);
    }
}
