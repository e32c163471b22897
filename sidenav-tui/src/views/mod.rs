//! Content holders for the main panel.
//!
//! This module provides:
//! - `ContentHolder`, the single mountable unit owned by the navigator
//! - `ViewRenderer` for drawing a holder into the main panel
//! - `MainView` (Home, About) and `SettingsView`

mod main_view;
mod settings;
mod traits;

pub use main_view::MainView;
pub use settings::{CHANGED_LABEL, SETTINGS_LABEL, SettingsView, UPDATED_LABEL};
pub use traits::ViewRenderer;

use ratatui::{Frame, layout::Rect};

use crate::App;
use crate::message::SettingsAction;
use crate::navigation::ViewId;

/// A mounted view and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentHolder {
    Home(MainView),
    Settings(SettingsView),
    About(MainView),
}

impl ContentHolder {
    /// The sidebar view this holder represents.
    pub fn view_id(&self) -> ViewId {
        match self {
            ContentHolder::Home(_) => ViewId::Home,
            ContentHolder::Settings(_) => ViewId::Settings,
            ContentHolder::About(_) => ViewId::About,
        }
    }

    pub fn main_view(&self) -> Option<&MainView> {
        match self {
            ContentHolder::Home(view) | ContentHolder::About(view) => Some(view),
            ContentHolder::Settings(_) => None,
        }
    }

    pub fn settings_view(&self) -> Option<&SettingsView> {
        match self {
            ContentHolder::Settings(view) => Some(view),
            _ => None,
        }
    }

    pub fn settings_view_mut(&mut self) -> Option<&mut SettingsView> {
        match self {
            ContentHolder::Settings(view) => Some(view),
            _ => None,
        }
    }

    /// Focusable buttons inside the holder, in focus order.
    pub fn buttons(&self) -> &'static [SettingsAction] {
        match self {
            ContentHolder::Settings(_) => &SettingsView::BUTTONS,
            _ => &[],
        }
    }
}

impl ViewRenderer for ContentHolder {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        match self {
            ContentHolder::Home(view) | ContentHolder::About(view) => {
                ViewRenderer::render(view, frame, area, app)
            }
            ContentHolder::Settings(view) => view.render(frame, area, app),
        }
    }

    fn title(&self) -> &str {
        self.view_id().label()
    }
}
