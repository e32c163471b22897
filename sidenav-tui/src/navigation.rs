//! View switching for the main panel.
//!
//! The [`Navigator`] owns the single content slot under the main panel.
//! Selecting a view always unmounts the current holder before mounting a
//! freshly built one, so at most one holder is ever reachable.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ParseViewIdError;
use crate::views::{ContentHolder, MainView, SettingsView};

/// Display text shown when the Home view is mounted.
pub const HOME_TEXT: &str = "Welcome to the Home view!";

/// Display text shown when the About view is mounted.
pub const ABOUT_TEXT: &str = "About this application.";

/// Views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Home,
    Settings,
    About,
}

impl ViewId {
    /// All views in sidebar order.
    pub const ALL: [ViewId; 3] = [ViewId::Home, ViewId::Settings, ViewId::About];

    /// Label shown on the sidebar button.
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Settings => "Settings",
            ViewId::About => "About",
        }
    }

    /// Lowercase tag used in logs and parsing.
    pub fn key(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Settings => "settings",
            ViewId::About => "about",
        }
    }

    /// Position of this view in the sidebar.
    pub fn index(self) -> usize {
        match self {
            ViewId::Home => 0,
            ViewId::Settings => 1,
            ViewId::About => 2,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewId {
    type Err = ParseViewIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseViewIdError(s.to_string()))
    }
}

/// Owner of the mounted content holder.
#[derive(Debug, Default)]
pub struct Navigator {
    slot: Option<ContentHolder>,
    mounts: u64,
    unmounts: u64,
}

impl Navigator {
    /// Creates a navigator with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the mounted holder with a new one for `id`.
    pub fn select_view(&mut self, id: ViewId) {
        if let Some(old) = self.unmount() {
            debug!(view = old.view_id().key(), "unmounted content holder");
        }

        let holder = match id {
            ViewId::Home => {
                let mut view = MainView::new();
                view.update(HOME_TEXT);
                ContentHolder::Home(view)
            }
            ViewId::About => {
                let mut view = MainView::new();
                view.update(ABOUT_TEXT);
                ContentHolder::About(view)
            }
            ViewId::Settings => ContentHolder::Settings(SettingsView::new()),
        };

        self.mount(holder);
        debug!(view = id.key(), mounts = self.mounts, "mounted content holder");
    }

    fn unmount(&mut self) -> Option<ContentHolder> {
        let old = self.slot.take();
        if old.is_some() {
            self.unmounts += 1;
        }
        old
    }

    fn mount(&mut self, holder: ContentHolder) {
        debug_assert!(self.slot.is_none(), "mount over a live content holder");
        self.slot = Some(holder);
        self.mounts += 1;
    }

    /// The view currently mounted, if any.
    pub fn active_view(&self) -> Option<ViewId> {
        self.slot.as_ref().map(ContentHolder::view_id)
    }

    /// The mounted holder, if any.
    pub fn mounted(&self) -> Option<&ContentHolder> {
        self.slot.as_ref()
    }

    /// Mutable access to the mounted holder, if any.
    pub fn mounted_mut(&mut self) -> Option<&mut ContentHolder> {
        self.slot.as_mut()
    }

    /// Number of holders in the main panel (0 or 1).
    pub fn mounted_count(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    /// Total mounts performed since creation.
    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    /// Total unmounts performed since creation.
    pub fn unmounts(&self) -> u64 {
        self.unmounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_text(nav: &Navigator) -> Option<&str> {
        nav.mounted().and_then(ContentHolder::main_view).map(MainView::render)
    }

    #[test]
    fn view_id_defaults_to_home() {
        assert_eq!(ViewId::default(), ViewId::Home);
    }

    #[test]
    fn view_ids_are_in_sidebar_order() {
        for (i, id) in ViewId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(ViewId::ALL[0].label(), "Home");
        assert_eq!(ViewId::ALL[1].label(), "Settings");
        assert_eq!(ViewId::ALL[2].label(), "About");
    }

    #[test]
    fn view_id_parses_case_insensitively() {
        assert_eq!("home".parse::<ViewId>(), Ok(ViewId::Home));
        assert_eq!("Settings".parse::<ViewId>(), Ok(ViewId::Settings));
        assert_eq!(" ABOUT ".parse::<ViewId>(), Ok(ViewId::About));
    }

    #[test]
    fn view_id_rejects_unknown_tags() {
        let err = "help".parse::<ViewId>().unwrap_err();
        assert_eq!(err, ParseViewIdError("help".to_string()));
    }

    #[test]
    fn navigator_starts_empty() {
        let nav = Navigator::new();
        assert_eq!(nav.mounted_count(), 0);
        assert_eq!(nav.active_view(), None);
        assert_eq!(nav.mounts(), 0);
    }

    #[test]
    fn first_selection_only_mounts() {
        let mut nav = Navigator::new();
        nav.select_view(ViewId::Home);

        assert_eq!(nav.mounted_count(), 1);
        assert_eq!(nav.mounts(), 1);
        assert_eq!(nav.unmounts(), 0);
        assert_eq!(main_text(&nav), Some(HOME_TEXT));
    }

    #[test]
    fn each_selection_mounts_exactly_the_selected_view() {
        let mut nav = Navigator::new();
        for id in ViewId::ALL {
            nav.select_view(id);
            assert_eq!(nav.active_view(), Some(id));
            assert_eq!(nav.mounted_count(), 1);
        }
    }

    #[test]
    fn every_reselection_is_one_unmount_mount_cycle() {
        let mut nav = Navigator::new();
        nav.select_view(ViewId::Home);
        nav.select_view(ViewId::Settings);
        nav.select_view(ViewId::Settings);
        nav.select_view(ViewId::About);

        assert_eq!(nav.mounts(), 4);
        assert_eq!(nav.unmounts(), 3);
        assert_eq!(nav.mounted_count(), 1);
    }

    #[test]
    fn about_then_home_sets_text() {
        let mut nav = Navigator::new();
        nav.select_view(ViewId::About);
        assert_eq!(main_text(&nav), Some(ABOUT_TEXT));

        nav.select_view(ViewId::Home);
        assert_eq!(main_text(&nav), Some(HOME_TEXT));
    }

    #[test]
    fn settings_holder_is_fresh_after_reselection() {
        let mut nav = Navigator::new();
        nav.select_view(ViewId::Settings);
        if let Some(ContentHolder::Settings(view)) = nav.mounted_mut() {
            view.on_update();
        }

        nav.select_view(ViewId::Home);
        nav.select_view(ViewId::Settings);

        let label = nav
            .mounted()
            .and_then(ContentHolder::settings_view)
            .map(SettingsView::label);
        assert_eq!(label, Some("Settings:"));
    }
}
