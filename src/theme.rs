//! Visual themes
//!
//! Five fixed style-token sets. Token values are Tailwind palette colors
//! expressed as 24-bit terminal colors.

use crate::error::DashboardError;
use ratatui::style::Color;
use serde::Deserialize;
use std::str::FromStr;

/// Key of one of the fixed themes, in picker order.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum ThemeKey {
    NeonNights,
    NatureInspired,
    #[default]
    OceanBreeze,
    SunsetVibes,
    GalaxyPurple,
}

/// Style tokens applied uniformly across the dashboard.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Theme {
    /// Selected theme button and progress fill.
    pub primary: Color,
    /// Detail panel border and footer hints.
    pub secondary: Color,
    /// Icons.
    pub accent: Color,
    /// Card background.
    pub card: Color,
    /// Foreground text.
    pub text: Color,
    /// Ring around the selected path card.
    pub highlight: Color,
    /// Progress bar track.
    pub progress_bg: Color,
    /// Module row background.
    pub module_bg: Color,
}

/// Background of unselected theme buttons (gray-200).
pub const INACTIVE_BUTTON: Color = Color::Rgb(229, 231, 235);
/// Muted foreground used for XP labels (gray-600).
pub const MUTED_TEXT: Color = Color::Rgb(75, 85, 99);

const NEON_NIGHTS: Theme = Theme {
    primary: Color::Rgb(147, 51, 234),
    secondary: Color::Rgb(236, 72, 153),
    accent: Color::Rgb(34, 211, 238),
    card: Color::Rgb(17, 24, 39),
    text: Color::Rgb(255, 255, 255),
    highlight: Color::Rgb(236, 72, 153),
    progress_bg: Color::Rgb(55, 65, 81),
    module_bg: Color::Rgb(31, 41, 55),
};

const NATURE_INSPIRED: Theme = Theme {
    primary: Color::Rgb(22, 163, 74),
    secondary: Color::Rgb(16, 185, 129),
    accent: Color::Rgb(250, 204, 21),
    card: Color::Rgb(250, 250, 249),
    text: Color::Rgb(41, 37, 36),
    highlight: Color::Rgb(16, 185, 129),
    progress_bg: Color::Rgb(231, 229, 228),
    module_bg: Color::Rgb(245, 245, 244),
};

const OCEAN_BREEZE: Theme = Theme {
    primary: Color::Rgb(59, 130, 246),
    secondary: Color::Rgb(34, 211, 238),
    accent: Color::Rgb(45, 212, 191),
    card: Color::Rgb(255, 255, 255),
    text: Color::Rgb(30, 41, 59),
    highlight: Color::Rgb(34, 211, 238),
    progress_bg: Color::Rgb(241, 245, 249),
    module_bg: Color::Rgb(239, 246, 255),
};

const SUNSET_VIBES: Theme = Theme {
    primary: Color::Rgb(249, 115, 22),
    secondary: Color::Rgb(248, 113, 113),
    accent: Color::Rgb(234, 179, 8),
    card: Color::Rgb(255, 255, 255),
    text: Color::Rgb(31, 41, 55),
    highlight: Color::Rgb(251, 146, 60),
    progress_bg: Color::Rgb(255, 237, 213),
    module_bg: Color::Rgb(255, 247, 237),
};

const GALAXY_PURPLE: Theme = Theme {
    primary: Color::Rgb(79, 70, 229),
    secondary: Color::Rgb(139, 92, 246),
    accent: Color::Rgb(232, 121, 249),
    card: Color::Rgb(248, 250, 252),
    text: Color::Rgb(15, 23, 42),
    highlight: Color::Rgb(139, 92, 246),
    progress_bg: Color::Rgb(226, 232, 240),
    module_bg: Color::Rgb(238, 242, 255),
};

impl ThemeKey {
    /// Returns the style tokens for this theme.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeKey::NeonNights => &NEON_NIGHTS,
            ThemeKey::NatureInspired => &NATURE_INSPIRED,
            ThemeKey::OceanBreeze => &OCEAN_BREEZE,
            ThemeKey::SunsetVibes => &SUNSET_VIBES,
            ThemeKey::GalaxyPurple => &GALAXY_PURPLE,
        }
    }

    /// Human readable name shown on the picker button.
    pub fn label(self) -> &'static str {
        match self {
            ThemeKey::NeonNights => "Neon Nights",
            ThemeKey::NatureInspired => "Nature",
            ThemeKey::OceanBreeze => "Ocean Breeze",
            ThemeKey::SunsetVibes => "Sunset Vibes",
            ThemeKey::GalaxyPurple => "Galaxy Purple",
        }
    }

    /// Parses a theme key, rejecting anything outside the fixed set.
    pub fn from_key(key: &str) -> Result<Self, DashboardError> {
        ThemeKey::from_str(key).map_err(|_| DashboardError::UnknownTheme(key.to_string()))
    }
}

impl TryFrom<String> for ThemeKey {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ThemeKey::from_key(&value)
    }
}
