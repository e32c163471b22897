//! Traits for view rendering in sidenav TUI.

use ratatui::{Frame, layout::Rect};

use crate::App;

/// Trait for content holders that can draw themselves into the main panel.
pub trait ViewRenderer {
    /// Render the view into `area` (the inside of the main panel).
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Get the view's title for display.
    fn title(&self) -> &str;
}
