//! Detail panel component
//!
//! Renders the module list of the selected learning path

use super::super::layout::detail_height;
use super::super::state::DashboardState;
use super::super::utils::split_row;
use crate::icons::Icon;
use crate::learning_path::Module;
use crate::theme::{MUTED_TEXT, Theme};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the selected path's modules in stored order.
pub fn render_detail_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let theme = state.theme();
    let path = state.path();

    let title = Line::from(format!("{} - Módulos", path.title)).style(
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    );
    let total = Line::from(format!("Total: {} XP", path.total_xp()))
        .style(Style::default().fg(theme.text))
        .right_aligned();

    // Short panels drop the vertical padding and the blank lines between rows
    let compact = area.height < detail_height(path.modules.len() as u16, false);
    let (padding, spacing) = if compact {
        (Padding::horizontal(2), 0)
    } else {
        (Padding::new(2, 2, 1, 1), 1)
    };

    let block = Block::default()
        .title(title)
        .title_bottom(total)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.secondary))
        .style(Style::default().fg(theme.text).bg(theme.card))
        .padding(padding);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical(path.modules.iter().map(|_| Constraint::Length(1)))
        .spacing(spacing)
        .split(inner);

    for (module, row) in path.modules.iter().zip(rows.iter()) {
        render_module_row(f, *row, module, theme);
    }
}

fn render_module_row(f: &mut Frame, area: Rect, module: &Module, theme: &Theme) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme.module_bg)),
        area,
    );

    let xp_text = format!("{} XP ", module.xp);
    let (name_area, xp_area) = split_row(area, xp_text.len() as u16);

    let name = Line::from(vec![
        Span::raw(" "),
        Span::styled(Icon::Trophy.glyph(), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled(module.name, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(name), name_area);
    f.render_widget(
        Paragraph::new(xp_text)
            .alignment(Alignment::Right)
            .style(Style::default().fg(MUTED_TEXT)),
        xp_area,
    );
}
