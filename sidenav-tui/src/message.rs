//! Messages dispatched through [`App::update`](crate::App::update).
//!
//! Every input (key, mouse, startup) is turned into one of these before it
//! touches application state.

use crate::layout::HitTarget;
use crate::navigation::ViewId;

/// Actions bound to the Settings view buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsAction {
    Update,
    ChangeLabel,
}

impl SettingsAction {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            SettingsAction::Update => "Update",
            SettingsAction::ChangeLabel => "Change Label",
        }
    }
}

/// Everything the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Mount the given view in the main panel.
    Navigate(ViewId),
    /// Run a Settings button handler. Only valid while Settings is mounted.
    Settings(SettingsAction),
    FocusNext,
    FocusPrev,
    /// Press the focused button.
    Press,
    /// Focus and press whatever is under the pointer.
    Click(HitTarget),
    /// Pointer moved; `Some(i)` when over sidebar button `i`.
    Hover(Option<usize>),
    Quit,
}

impl Message {
    /// Whether handling this message can change what is on screen.
    pub fn mutates_display(&self) -> bool {
        !matches!(self, Message::Quit)
    }
}
