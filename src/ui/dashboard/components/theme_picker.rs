//! Theme picker component
//!
//! Renders one button per theme

use super::super::state::DashboardState;
use crate::icons::Icon;
use crate::theme::{INACTIVE_BUTTON, MUTED_TEXT, ThemeKey};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Render the theme buttons. The active one is filled with its own primary color.
pub fn render_theme_picker(f: &mut Frame, buttons: &[(ThemeKey, Rect)], state: &DashboardState) {
    for (key, area) in buttons {
        let style = if *key == state.selected_theme() {
            Style::default()
                .fg(Color::White)
                .bg(key.theme().primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT).bg(INACTIVE_BUTTON)
        };

        let label = Line::from(format!("{} {}", Icon::Palette.glyph(), key.label()));
        let button = Paragraph::new(vec![Line::default(), label])
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(button, *area);
    }
}
