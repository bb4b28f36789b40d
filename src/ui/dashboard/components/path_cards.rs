//! Learning path cards component
//!
//! Renders the summary card grid with each path's static progress

use super::super::state::DashboardState;
use super::super::utils::split_row;
use crate::learning_path::PathKey;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

const PROGRESS_LABEL: &str = "Progreso";

/// Render every path card into its grid cell.
pub fn render_path_cards(f: &mut Frame, cards: &[(PathKey, Rect)], state: &DashboardState) {
    for (key, area) in cards {
        render_path_card(f, *area, *key, state);
    }
}

fn render_path_card(f: &mut Frame, area: Rect, key: PathKey, state: &DashboardState) {
    let theme = state.theme();

    // Only the selected card gets a visible ring
    let (border_type, border_style) = if key == state.selected_path() {
        (
            BorderType::Thick,
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(theme.card))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Style::default().fg(theme.text).bg(theme.card))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Full cards use four inner rows, compact cards put the progress on one
    if inner.height >= 4 {
        let [title_row, _, label_row, bar_row] =
            Layout::vertical([Constraint::Length(1); 4]).areas(inner);
        render_title_row(f, title_row, key, state);

        let (label_area, value_area) = split_row(label_row, progress_text(key).len() as u16);
        f.render_widget(Paragraph::new(PROGRESS_LABEL), label_area);
        f.render_widget(
            Paragraph::new(progress_text(key)).alignment(Alignment::Right),
            value_area,
        );
        f.render_widget(progress_bar(key, state), bar_row);
    } else {
        let [title_row, progress_row] = Layout::vertical([Constraint::Length(1); 2]).areas(inner);
        render_title_row(f, title_row, key, state);

        let value_width = progress_text(key).len() as u16 + 1;
        let [label_area, bar_area, value_area] = Layout::horizontal([
            Constraint::Length(PROGRESS_LABEL.len() as u16 + 1),
            Constraint::Fill(1),
            Constraint::Length(value_width),
        ])
        .areas(progress_row);
        f.render_widget(Paragraph::new(PROGRESS_LABEL), label_area);
        f.render_widget(progress_bar(key, state), bar_area);
        f.render_widget(
            Paragraph::new(progress_text(key)).alignment(Alignment::Right),
            value_area,
        );
    }
}

fn progress_text(key: PathKey) -> String {
    format!("{}%", key.path().progress)
}

fn render_title_row(f: &mut Frame, area: Rect, key: PathKey, state: &DashboardState) {
    let (title_area, icon_area) = split_row(area, 3);
    f.render_widget(
        Paragraph::new(key.path().title).style(Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );
    f.render_widget(
        Paragraph::new(key.icon().glyph())
            .alignment(Alignment::Right)
            .style(Style::default().fg(state.theme().accent)),
        icon_area,
    );
}

fn progress_bar(key: PathKey, state: &DashboardState) -> Gauge<'static> {
    let theme = state.theme();
    Gauge::default()
        .gauge_style(Style::default().fg(theme.primary).bg(theme.progress_bg))
        .percent(key.path().progress)
        .label(Span::raw(""))
}
