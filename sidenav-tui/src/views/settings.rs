//! Settings view with a mutable label and two action buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::traits::ViewRenderer;
use crate::App;
use crate::layout::content_button_areas;
use crate::message::SettingsAction;
use crate::state::Focus;

/// Label shown when the Settings view is first mounted.
pub const SETTINGS_LABEL: &str = "Settings:";

/// Label set by the "Update" button.
pub const UPDATED_LABEL: &str = "Settings Updated!";

/// Label set by the "Change Label" button.
pub const CHANGED_LABEL: &str = "Updated Settings Label";

/// Settings panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    label: String,
}

impl SettingsView {
    /// Buttons in display and focus order.
    pub const BUTTONS: [SettingsAction; 2] = [SettingsAction::Update, SettingsAction::ChangeLabel];

    pub fn new() -> Self {
        Self {
            label: SETTINGS_LABEL.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handler for the "Update" button.
    pub fn on_update(&mut self) {
        self.label = UPDATED_LABEL.to_string();
    }

    /// Handler for the "Change Label" button.
    pub fn on_change_label(&mut self) {
        self.label = CHANGED_LABEL.to_string();
    }

    /// Runs the handler bound to `action`.
    pub fn apply(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Update => self.on_update(),
            SettingsAction::ChangeLabel => self.on_change_label(),
        }
    }
}

impl Default for SettingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for SettingsView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }

        let label_area = Rect { height: 1, ..area };
        let label = Paragraph::new(Line::styled(self.label.as_str(), app.theme.bold));
        frame.render_widget(label, label_area);

        let buttons = content_button_areas(area, Self::BUTTONS.len());
        for (i, (action, button_area)) in Self::BUTTONS.iter().zip(buttons).enumerate() {
            let style = if app.focus == Focus::Content(i) {
                Style::default()
                    .fg(app.theme.button_fg)
                    .bg(app.theme.button_focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.button_fg).bg(app.theme.button_bg)
            };
            let button = Paragraph::new(action.label())
                .style(style)
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(button, button_area);
        }
    }

    fn title(&self) -> &str {
        "Settings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn settings_view_has_correct_title() {
        let view = SettingsView::new();
        assert_eq!(view.title(), "Settings");
    }

    #[test]
    fn settings_view_starts_with_default_label() {
        assert_eq!(SettingsView::default().label(), "Settings:");
    }

    #[test]
    fn on_update_sets_fixed_label() {
        let mut view = SettingsView::new();
        view.on_update();
        assert_eq!(view.label(), "Settings Updated!");
    }

    #[test]
    fn on_change_label_is_wired_to_its_button() {
        let mut view = SettingsView::new();
        view.apply(SettingsAction::ChangeLabel);
        assert_eq!(view.label(), "Updated Settings Label");
    }

    #[test]
    fn handlers_are_idempotent() {
        let mut view = SettingsView::new();
        view.on_update();
        let once = view.clone();
        view.on_update();
        assert_eq!(view, once);

        view.on_change_label();
        let once = view.clone();
        view.on_change_label();
        assert_eq!(view, once);
    }

    #[test]
    fn last_handler_wins() {
        let mut view = SettingsView::new();
        view.on_change_label();
        view.on_update();
        assert_eq!(view.label(), UPDATED_LABEL);
    }

    #[test]
    fn settings_view_draws_label_and_buttons() {
        let app = App::default();
        let view = SettingsView::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, &app);
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Settings:"));
        assert!(content.contains("Update"));
        assert!(content.contains("Change Label"));
    }
}
