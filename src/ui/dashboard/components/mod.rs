//! Dashboard UI components

pub mod detail_panel;
pub mod footer;
pub mod path_cards;
pub mod theme_picker;
