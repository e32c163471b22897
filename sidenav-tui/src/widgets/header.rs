//! Header bar showing the application title and the active view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;
use crate::navigation::ViewId;

/// Title shown at the left of the header.
pub const APP_TITLE: &str = "sidenav";

/// Widget for rendering the header bar.
pub struct HeaderWidget;

impl HeaderWidget {
    /// Builds the header line: `sidenav · <view>`.
    pub fn line(active: Option<ViewId>, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {APP_TITLE}"),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(view) = active {
            spans.push(Span::styled(
                format!(" · {}", view.label()),
                Style::default().fg(theme.header_fg),
            ));
        }
        Line::from(spans)
    }

    pub fn render(frame: &mut Frame, area: Rect, active: Option<ViewId>, theme: &Theme) {
        let header = Paragraph::new(Self::line(active, theme))
            .style(Style::default().bg(theme.header_bg));
        frame.render_widget(header, area);
    }
}
