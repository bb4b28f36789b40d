//! Dashboard utility functions
//!
//! Helpers shared by the updaters and the components

use ratatui::layout::{Constraint, Layout, Rect};
use strum::IntoEnumIterator;

/// Steps to the neighbouring variant of a closed enum, wrapping at both ends.
pub fn cycle<T>(current: T, forward: bool) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % all.len()
    } else {
        (index + all.len() - 1) % all.len()
    };
    all[next]
}

/// The `index`-th variant of a closed enum, if there is one.
pub fn nth<T: IntoEnumIterator>(index: usize) -> Option<T> {
    T::iter().nth(index)
}

/// Splits a single row into a left part and a right part of `right_width` cells.
pub fn split_row(area: Rect, right_width: u16) -> (Rect, Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(right_width)]).areas(area);
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning_path::PathKey;
    use crate::theme::ThemeKey;

    #[test]
    fn test_cycle_wraps_forward() {
        assert_eq!(cycle(PathKey::Ecommerce, true), PathKey::Content);
        assert_eq!(cycle(PathKey::Technical, true), PathKey::Ecommerce);
    }

    #[test]
    fn test_cycle_wraps_backward() {
        assert_eq!(cycle(ThemeKey::NeonNights, false), ThemeKey::GalaxyPurple);
        assert_eq!(cycle(ThemeKey::OceanBreeze, false), ThemeKey::NatureInspired);
    }

    #[test]
    fn test_nth_is_bounded() {
        assert_eq!(nth::<PathKey>(3), Some(PathKey::Technical));
        assert_eq!(nth::<PathKey>(4), None);
        assert_eq!(nth::<ThemeKey>(4), Some(ThemeKey::GalaxyPurple));
    }
}
