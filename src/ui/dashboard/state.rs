//! Dashboard state management
//!
//! The two selection cells owned by a dashboard instance.

use crate::learning_path::{LearningPath, PathKey};
use crate::theme::{Theme, ThemeKey};

/// Selection state of one dashboard view.
///
/// Both cells are closed enums, so a selection can never name a theme or
/// path that does not exist. Each is a last-write-wins register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Path whose modules are listed in the detail panel.
    selected_path: PathKey,
    /// Theme applied to every widget.
    selected_theme: ThemeKey,
}

impl DashboardState {
    /// Creates a dashboard with the default selection (`ecommerce`, `oceanBreeze`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_path(&self) -> PathKey {
        self.selected_path
    }

    pub fn selected_theme(&self) -> ThemeKey {
        self.selected_theme
    }

    // Setters for the updaters
    pub(super) fn set_selected_path(&mut self, path: PathKey) {
        self.selected_path = path;
    }

    pub(super) fn set_selected_theme(&mut self, theme: ThemeKey) {
        self.selected_theme = theme;
    }

    /// Style tokens of the selected theme.
    pub fn theme(&self) -> &'static Theme {
        self.selected_theme.theme()
    }

    /// The selected learning path.
    pub fn path(&self) -> &'static LearningPath {
        self.selected_path.path()
    }
}
