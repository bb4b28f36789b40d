//! Dashboard geometry
//!
//! A pure function of the frame area, shared by the renderer and by mouse
//! hit-testing so that what is drawn is exactly what is clickable.

use crate::consts::cli_consts::layout::{
    CARD_HEIGHT, COMPACT_CARD_HEIGHT, FOOTER_HEIGHT, GAP, MEDIUM_MIN_WIDTH, PICKER_BUTTON_WIDTH,
    PICKER_HEIGHT, WIDE_MIN_WIDTH,
};
use crate::learning_path::PathKey;
use crate::theme::ThemeKey;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use strum::{EnumCount, IntoEnumIterator};

/// Something on screen that reacts to a click.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickTarget {
    Theme(ThemeKey),
    Path(PathKey),
}

/// Screen regions of every dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Theme buttons, in picker order.
    pub theme_buttons: Vec<(ThemeKey, Rect)>,
    /// Path cards, in card order.
    pub path_cards: Vec<(PathKey, Rect)>,
    /// Module list of the selected path.
    pub detail: Rect,
    /// Key binding hints.
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect) -> Self {
        let columns = grid_columns(area.width);
        let card_height = card_height(area.height, columns);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PICKER_HEIGHT),
                Constraint::Length(grid_height(columns, card_height)),
                Constraint::Fill(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .spacing(GAP)
            .margin(1)
            .split(area);

        Self {
            theme_buttons: picker_buttons(main_chunks[0]),
            path_cards: card_grid(main_chunks[1], columns, card_height),
            detail: main_chunks[2],
            footer: main_chunks[3],
        }
    }

    /// Returns the widget under the given cell, if it is clickable.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        if let Some((key, _)) = self
            .theme_buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
        {
            return Some(ClickTarget::Theme(*key));
        }
        self.path_cards
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(key, _)| ClickTarget::Path(*key))
    }
}

/// Number of card columns for a given width: 4, 2 or 1.
pub fn grid_columns(width: u16) -> u16 {
    if width >= WIDE_MIN_WIDTH {
        4
    } else if width >= MEDIUM_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Rows the detail panel needs to list `modules` modules, with or without
/// vertical padding and blank lines between rows.
pub fn detail_height(modules: u16, compact: bool) -> u16 {
    if compact {
        modules + 2
    } else {
        2 * modules + 3
    }
}

/// Tallest card that still leaves the detail panel room for every module.
///
/// Full cards with a full module list come first. Then the module list
/// loses its spacing, then the cards shrink. On terminals too short for
/// any of these the cards are compact and the panel takes what is left.
fn card_height(height: u16, columns: u16) -> u16 {
    let modules = PathKey::iter()
        .map(|key| key.path().modules.len() as u16)
        .max()
        .unwrap_or(0);
    // Outer margin, picker, footer and the gaps between the four regions
    let available = height.saturating_sub(2 + PICKER_HEIGHT + FOOTER_HEIGHT + 3 * GAP);

    [
        (CARD_HEIGHT, false),
        (CARD_HEIGHT, true),
        (COMPACT_CARD_HEIGHT, false),
        (COMPACT_CARD_HEIGHT, true),
    ]
    .into_iter()
    .find(|&(card, compact)| grid_height(columns, card) + detail_height(modules, compact) <= available)
    .map_or(COMPACT_CARD_HEIGHT, |(card, _)| card)
}

fn grid_height(columns: u16, card_height: u16) -> u16 {
    let rows = (PathKey::COUNT as u16).div_ceil(columns);
    rows * card_height + rows.saturating_sub(1) * GAP
}

/// Right-aligned row of theme buttons.
fn picker_buttons(area: Rect) -> Vec<(ThemeKey, Rect)> {
    let constraints = std::iter::once(Constraint::Fill(1))
        .chain(ThemeKey::iter().map(|_| Constraint::Length(PICKER_BUTTON_WIDTH)));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(GAP)
        .split(area);

    ThemeKey::iter()
        .zip(chunks.iter().skip(1).copied())
        .collect()
}

fn card_grid(area: Rect, columns: u16, card_height: u16) -> Vec<(PathKey, Rect)> {
    let rows = (PathKey::COUNT as u16).div_ceil(columns);
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(card_height)))
        .spacing(GAP)
        .split(area);

    let cells: Vec<Rect> = row_chunks
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
                .spacing(GAP)
                .split(*row)
                .to_vec()
        })
        .collect();

    PathKey::iter().zip(cells).collect()
}
