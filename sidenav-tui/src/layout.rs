//! Screen layout shared by rendering and mouse hit-testing.
//!
//! ```text
//! ┌ header ───────────────────────────────┐
//! │ sidebar │ main panel                  │
//! │ [Home]  │ ┌ Home ───────────────────┐ │
//! │         │ │ Welcome to the Home...  │ │
//! │ [About] │ └─────────────────────────┘ │
//! └ footer ───────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Padding},
};

/// Width of a content-panel button, in columns.
pub const CONTENT_BUTTON_WIDTH: u16 = 16;

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Sidebar(usize),
    Content(usize),
}

/// Block framing the main panel. Rendering adds title and colors on top.
pub fn panel_block() -> Block<'static> {
    Block::bordered().padding(Padding::horizontal(1))
}

/// One row per sidebar button with a blank row between buttons.
pub fn sidebar_button_areas(sidebar: Rect, count: usize) -> Vec<Rect> {
    let inner = Block::default().padding(Padding::uniform(1)).inner(sidebar);
    stacked_rows(inner, 0, inner.width, count)
}

/// Content-panel buttons stacked under the first (label) row.
pub fn content_button_areas(inner: Rect, count: usize) -> Vec<Rect> {
    stacked_rows(inner, 2, CONTENT_BUTTON_WIDTH.min(inner.width), count)
}

fn stacked_rows(area: Rect, first_row: u16, width: u16, count: usize) -> Vec<Rect> {
    if width == 0 {
        return Vec::new();
    }
    (0..count)
        .map_while(|i| {
            let offset = first_row.checked_add(u16::try_from(i).ok()?.checked_mul(2)?)?;
            let y = area.y.checked_add(offset)?;
            (y < area.bottom()).then_some(Rect::new(area.x, y, width, 1))
        })
        .collect()
}

/// Resolved areas for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    /// Inside of the main panel border, where the content holder draws.
    pub content: Rect,
    pub footer: Rect,
    pub sidebar_buttons: Vec<Rect>,
    pub content_buttons: Vec<Rect>,
}

impl AppLayout {
    /// Splits `area` into header, sidebar, main panel and footer.
    pub fn compute(
        area: Rect,
        sidebar_width: u16,
        sidebar_buttons: usize,
        content_buttons: usize,
    ) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(rows[1]);

        let sidebar = columns[0];
        let main = columns[1];
        let content = panel_block().inner(main);

        Self {
            header: rows[0],
            sidebar,
            main,
            content,
            footer: rows[2],
            sidebar_buttons: sidebar_button_areas(sidebar, sidebar_buttons),
            content_buttons: content_button_areas(content, content_buttons),
        }
    }

    /// Finds the button under the given cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if let Some(i) = self.sidebar_buttons.iter().position(|r| r.contains(pos)) {
            return Some(HitTarget::Sidebar(i));
        }
        self.content_buttons
            .iter()
            .position(|r| r.contains(pos))
            .map(HitTarget::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AppLayout {
        AppLayout::compute(Rect::new(0, 0, 80, 24), 16, 3, 2)
    }

    #[test]
    fn header_and_footer_take_one_row_each() {
        let l = layout();
        assert_eq!(l.header, Rect::new(0, 0, 80, 1));
        assert_eq!(l.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn sidebar_has_configured_width() {
        let l = layout();
        assert_eq!(l.sidebar, Rect::new(0, 1, 16, 22));
        assert_eq!(l.main, Rect::new(16, 1, 64, 22));
    }

    #[test]
    fn content_sits_inside_panel_border() {
        let l = layout();
        assert_eq!(l.content, Rect::new(18, 2, 60, 20));
    }

    #[test]
    fn sidebar_buttons_are_spaced_rows() {
        let l = layout();
        assert_eq!(
            l.sidebar_buttons,
            vec![
                Rect::new(1, 2, 14, 1),
                Rect::new(1, 4, 14, 1),
                Rect::new(1, 6, 14, 1),
            ]
        );
    }

    #[test]
    fn content_buttons_follow_the_label_row() {
        let l = layout();
        assert_eq!(
            l.content_buttons,
            vec![Rect::new(18, 4, 16, 1), Rect::new(18, 6, 16, 1)]
        );
    }

    #[test]
    fn hit_finds_sidebar_and_content_buttons() {
        let l = layout();
        assert_eq!(l.hit(3, 4), Some(HitTarget::Sidebar(1)));
        assert_eq!(l.hit(20, 6), Some(HitTarget::Content(1)));
        assert_eq!(l.hit(3, 3), None);
        assert_eq!(l.hit(60, 10), None);
    }

    #[test]
    fn buttons_that_do_not_fit_are_dropped() {
        let l = AppLayout::compute(Rect::new(0, 0, 40, 6), 16, 3, 2);
        // Body is 4 rows; sidebar inner is 2 rows, so only the first button fits.
        assert_eq!(l.sidebar_buttons.len(), 1);
    }

    #[test]
    fn zero_area_yields_no_buttons() {
        let l = AppLayout::compute(Rect::default(), 16, 3, 2);
        assert!(l.sidebar_buttons.is_empty());
        assert!(l.content_buttons.is_empty());
    }
}
