//! Main view - a read-only text panel used by Home and About.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::navigation::HOME_TEXT;

/// Text panel shown for the Home and About views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    content: String,
}

impl MainView {
    /// Creates a MainView showing the Home greeting.
    pub fn new() -> Self {
        Self {
            content: HOME_TEXT.to_string(),
        }
    }

    /// Replaces the displayed text. Any string is accepted.
    pub fn update(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// Returns the current text verbatim.
    pub fn render(&self) -> &str {
        &self.content
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for MainView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let text = Paragraph::new(self.content.as_str())
            .style(Style::default().fg(app.theme.fg))
            .wrap(Wrap { trim: false });
        frame.render_widget(text, area);
    }

    fn title(&self) -> &str {
        "Main"
    }
}
