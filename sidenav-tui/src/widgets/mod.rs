//! Widgets for the sidenav TUI.
//!
//! Reusable pieces of chrome drawn around the main panel.

mod footer;
mod header;
mod sidebar;

pub use footer::FooterWidget;
pub use header::HeaderWidget;
pub use sidebar::{SidebarButton, SidebarWidget};
