//! Dashboard footer component
//!
//! Renders the key binding hints

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::Paragraph;

/// Render footer with key bindings.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let theme = state.theme();
    let footer_text = "[1-4 / ←→] Path | [T / Shift+T / F1-F5] Theme | Click to select | [Q] Quit";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.secondary)
                .bg(theme.card)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(footer, area);
}
