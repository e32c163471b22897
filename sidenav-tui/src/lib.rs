//! Terminal UI for sidenav.
//!
//! A sidebar with Home, Settings and About buttons that swaps the content
//! of a main panel, built on ratatui and crossterm.

mod app;
mod error;
mod keybindings;
mod layout;
mod message;
mod navigation;
mod state;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{App, AppOptions, DEFAULT_SIDEBAR_WIDTH, DEFAULT_TICK_RATE};
pub use error::{ParseViewIdError, TuiError};
pub use keybindings::KeyBindings;
pub use layout::{AppLayout, HitTarget};
pub use message::{Message, SettingsAction};
pub use navigation::{ABOUT_TEXT, HOME_TEXT, Navigator, ViewId};
pub use state::Focus;
pub use terminal::{SidenavTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, sidenav_default};
pub use views::{
    CHANGED_LABEL, ContentHolder, MainView, SETTINGS_LABEL, SettingsView, UPDATED_LABEL,
    ViewRenderer,
};
pub use widgets::{SidebarButton, SidebarWidget};
