//! Footer bar with key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;
use crate::navigation::ViewId;

/// Widget for rendering the key hint bar.
pub struct FooterWidget;

impl FooterWidget {
    /// Key hints for the given view, as (key, description) pairs.
    pub fn hints(active: Option<ViewId>) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("1-3", "Views"), ("Tab", "Focus"), ("Enter", "Press")];
        if active == Some(ViewId::Settings) {
            hints.push(("u", "Update"));
            hints.push(("c", "Change Label"));
        }
        hints.push(("q", "Quit"));
        hints
    }

    pub fn render(frame: &mut Frame, area: Rect, active: Option<ViewId>, theme: &Theme) {
        let spans: Vec<Span> = Self::hints(active)
            .into_iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" {key}"), Style::default().fg(theme.accent)),
                    Span::styled(format!(" {desc} "), theme.dim),
                ]
            })
            .collect();

        let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
        frame.render_widget(footer, area);
    }
}
