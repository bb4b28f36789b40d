//! Dashboard state update logic
//!
//! Every user interaction ends in one of these methods. Each runs to
//! completion before the next input is read.

use super::layout::{ClickTarget, DashboardLayout};
use super::state::DashboardState;
use super::utils::cycle;
use crate::learning_path::PathKey;
use crate::theme::ThemeKey;
use ratatui::layout::Rect;

impl DashboardState {
    /// Applies a theme to every widget. Selecting the current theme is a no-op.
    pub fn select_theme(&mut self, theme: ThemeKey) {
        if theme != self.selected_theme() {
            tracing::debug!("Theme changed: {} -> {}", self.selected_theme(), theme);
        }
        self.set_selected_theme(theme);
    }

    /// Shows the modules of a path in the detail panel.
    pub fn select_path(&mut self, path: PathKey) {
        if path != self.selected_path() {
            tracing::debug!("Path changed: {} -> {}", self.selected_path(), path);
        }
        self.set_selected_path(path);
    }

    pub fn next_theme(&mut self) {
        self.select_theme(cycle(self.selected_theme(), true));
    }

    pub fn previous_theme(&mut self) {
        self.select_theme(cycle(self.selected_theme(), false));
    }

    pub fn next_path(&mut self) {
        self.select_path(cycle(self.selected_path(), true));
    }

    pub fn previous_path(&mut self) {
        self.select_path(cycle(self.selected_path(), false));
    }

    /// Handles a click at a terminal cell of a frame covering `area`.
    ///
    /// Returns the widget that was hit, or `None` when the click landed on
    /// nothing selectable.
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
        let target = DashboardLayout::compute(area).target_at(column, row)?;
        match target {
            ClickTarget::Theme(theme) => self.select_theme(theme),
            ClickTarget::Path(path) => self.select_path(path),
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_dashboard_defaults() {
        let state = DashboardState::new();
        assert_eq!(state.selected_path(), PathKey::Ecommerce);
        assert_eq!(state.selected_theme(), ThemeKey::OceanBreeze);
    }

    #[test]
    fn test_select_theme_is_last_write_wins() {
        let mut state = DashboardState::new();
        for theme in ThemeKey::iter() {
            state.select_theme(theme);
            assert_eq!(state.selected_theme(), theme);
            assert_eq!(state.theme(), theme.theme());
        }
        assert_eq!(state.selected_path(), PathKey::Ecommerce);
    }

    #[test]
    fn test_select_same_theme_is_idempotent() {
        let mut state = DashboardState::new();
        state.select_theme(ThemeKey::NeonNights);
        let before = state;
        state.select_theme(ThemeKey::NeonNights);
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_path_leaves_theme_alone() {
        let mut state = DashboardState::new();
        state.select_theme(ThemeKey::SunsetVibes);
        state.select_path(PathKey::Technical);
        assert_eq!(state.selected_path(), PathKey::Technical);
        assert_eq!(state.path().title, "SEO Técnico");
        assert_eq!(state.selected_theme(), ThemeKey::SunsetVibes);
    }

    #[test]
    fn test_cycling_visits_every_key() {
        let mut state = DashboardState::new();
        let mut seen = Vec::new();
        for _ in PathKey::iter() {
            state.next_path();
            seen.push(state.selected_path());
        }
        assert_eq!(
            seen,
            [
                PathKey::Content,
                PathKey::Local,
                PathKey::Technical,
                PathKey::Ecommerce
            ]
        );

        state.previous_theme();
        assert_eq!(state.selected_theme(), ThemeKey::NatureInspired);
        state.next_theme();
        state.next_theme();
        assert_eq!(state.selected_theme(), ThemeKey::SunsetVibes);
    }

    #[test]
    fn test_click_on_card_selects_path() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DashboardLayout::compute(area);
        let (_, card) = layout.path_cards[2];

        let mut state = DashboardState::new();
        let hit = state.handle_click(area, card.x + 2, card.y + 2);
        assert_eq!(hit, Some(ClickTarget::Path(PathKey::Local)));
        assert_eq!(state.selected_path(), PathKey::Local);
    }

    #[test]
    fn test_click_on_button_selects_theme() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DashboardLayout::compute(area);
        let (_, button) = layout.theme_buttons[4];

        let mut state = DashboardState::new();
        state.handle_click(area, button.x, button.y);
        assert_eq!(state.selected_theme(), ThemeKey::GalaxyPurple);
    }

    #[test]
    fn test_click_elsewhere_changes_nothing() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DashboardLayout::compute(area);

        let mut state = DashboardState::new();
        let hit = state.handle_click(area, layout.footer.x + 1, layout.footer.y);
        assert_eq!(hit, None);
        assert_eq!(state, DashboardState::new());
    }
}
