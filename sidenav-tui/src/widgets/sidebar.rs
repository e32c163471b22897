//! Sidebar widget with one navigation button per view.
//!
//! Buttons are built from [`ViewId::ALL`], so the button set is fixed at
//! construction and every button carries the view it activates.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::Theme;
use crate::message::Message;
use crate::navigation::ViewId;

/// A sidebar button tagged with the view it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarButton {
    pub label: &'static str,
    pub view: ViewId,
}

impl SidebarButton {
    pub fn new(view: ViewId) -> Self {
        Self {
            label: view.label(),
            view,
        }
    }

    /// The message a press of this button produces.
    pub fn press(&self) -> Message {
        Message::Navigate(self.view)
    }
}

/// Sidebar state: the buttons and which one is under the mouse.
#[derive(Debug, Clone)]
pub struct SidebarWidget {
    pub buttons: Vec<SidebarButton>,
    pub hovered: Option<usize>,
}

impl SidebarWidget {
    /// Creates a sidebar with Home, Settings and About buttons.
    pub fn new() -> Self {
        Self {
            buttons: ViewId::ALL.into_iter().map(SidebarButton::new).collect(),
            hovered: None,
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Presses button `index`, if it exists.
    pub fn press(&self, index: usize) -> Option<Message> {
        self.buttons.get(index).map(SidebarButton::press)
    }

    /// Updates the hovered button. Returns true if it changed.
    pub fn set_hovered(&mut self, hovered: Option<usize>) -> bool {
        let hovered = hovered.filter(|i| *i < self.buttons.len());
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    /// Draws the sidebar background and its buttons.
    ///
    /// `button_areas` comes from the shared layout so clicks line up with
    /// what is drawn.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        button_areas: &[Rect],
        active: Option<ViewId>,
        focused: Option<usize>,
        theme: &Theme,
    ) {
        let background =
            Block::default().style(Style::default().bg(theme.sidebar_bg).fg(theme.sidebar_fg));
        frame.render_widget(background, area);

        for (i, (button, button_area)) in self.buttons.iter().zip(button_areas).enumerate() {
            let marker = if active == Some(button.view) { "▸ " } else { "  " };
            let style = self.button_style(i, focused, theme);
            let text = Paragraph::new(format!("{marker}{}", button.label)).style(style);
            frame.render_widget(text, *button_area);
        }
    }

    fn button_style(&self, index: usize, focused: Option<usize>, theme: &Theme) -> Style {
        // Hover wins over focus.
        if self.hovered == Some(index) {
            Style::default()
                .fg(Color::Black)
                .bg(theme.button_hover)
                .add_modifier(Modifier::BOLD)
        } else if focused == Some(index) {
            Style::default()
                .fg(theme.button_fg)
                .bg(theme.button_focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.button_fg).bg(theme.button_bg)
        }
    }
}

impl Default for SidebarWidget {
    fn default() -> Self {
        Self::new()
    }
}
