//! Dashboard main renderer

use super::components::{detail_panel, footer, path_cards, theme_picker};
use super::layout::DashboardLayout;
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::Style;
use ratatui::widgets::Block;

/// Draws the whole dashboard. Output depends only on the selection state.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    f.render_widget(
        Block::default().style(Style::default().fg(state.theme().text)),
        f.area(),
    );

    let layout = DashboardLayout::compute(f.area());

    theme_picker::render_theme_picker(f, &layout.theme_buttons, state);
    path_cards::render_path_cards(f, &layout.path_cards, state);
    detail_panel::render_detail_panel(f, layout.detail, state);
    footer::render_footer(f, layout.footer, state);
}
