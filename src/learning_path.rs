//! Static learning path catalog

use crate::error::DashboardError;
use crate::icons::Icon;
use serde::Deserialize;
use std::str::FromStr;

/// Key of one of the fixed learning paths, in card order.
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
pub enum PathKey {
    #[default]
    Ecommerce,
    Content,
    Local,
    Technical,
}

/// A single learning unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Module {
    pub name: &'static str,
    pub xp: u32,
}

/// A named track of modules.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LearningPath {
    pub title: &'static str,
    /// Completion percentage. Progress tracking is not wired in, so every
    /// path carries 0.
    pub progress: u16,
    pub modules: &'static [Module],
}

impl LearningPath {
    /// Sum of the XP of every module in the path.
    pub fn total_xp(&self) -> u32 {
        self.modules.iter().map(|m| m.xp).sum()
    }
}

const ECOMMERCE: LearningPath = LearningPath {
    title: "SEO E-commerce",
    progress: 0,
    modules: &[
        Module { name: "Optimización de productos", xp: 100 },
        Module { name: "Estructura de categorías", xp: 150 },
        Module { name: "URLs amigables", xp: 75 },
        Module { name: "Rich snippets", xp: 125 },
    ],
};

const CONTENT: LearningPath = LearningPath {
    title: "Content Specialist",
    progress: 0,
    modules: &[
        Module { name: "Keyword Research", xp: 100 },
        Module { name: "Copywriting SEO", xp: 150 },
        Module { name: "Estrategia de contenidos", xp: 200 },
        Module { name: "Optimización on-page", xp: 125 },
    ],
};

const LOCAL: LearningPath = LearningPath {
    title: "SEO Local",
    progress: 0,
    modules: &[
        Module { name: "Google My Business", xp: 100 },
        Module { name: "Citations locales", xp: 75 },
        Module { name: "Optimización local", xp: 125 },
        Module { name: "Reseñas y reputación", xp: 150 },
    ],
};

const TECHNICAL: LearningPath = LearningPath {
    title: "SEO Técnico",
    progress: 0,
    modules: &[
        Module { name: "Velocidad de carga", xp: 150 },
        Module { name: "Arquitectura web", xp: 200 },
        Module { name: "Indexación", xp: 125 },
        Module { name: "Mobile-first", xp: 100 },
    ],
};

impl PathKey {
    pub fn path(self) -> &'static LearningPath {
        match self {
            PathKey::Ecommerce => &ECOMMERCE,
            PathKey::Content => &CONTENT,
            PathKey::Local => &LOCAL,
            PathKey::Technical => &TECHNICAL,
        }
    }

    /// Icon drawn in the corner of the path card.
    pub fn icon(self) -> Icon {
        match self {
            PathKey::Ecommerce => Icon::ShoppingCart,
            PathKey::Content => Icon::BookOpen,
            PathKey::Local => Icon::Map,
            PathKey::Technical => Icon::Code,
        }
    }

    /// Parses a path key, rejecting anything outside the fixed set.
    pub fn from_key(key: &str) -> Result<Self, DashboardError> {
        PathKey::from_str(key).map_err(|_| DashboardError::UnknownPath(key.to_string()))
    }
}

impl TryFrom<String> for PathKey {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PathKey::from_key(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_path_keys_in_card_order() {
        let keys: Vec<String> = PathKey::iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, ["ecommerce", "content", "local", "technical"]);
    }

    #[test]
    fn test_ecommerce_modules() {
        let path = PathKey::Ecommerce.path();
        assert_eq!(path.title, "SEO E-commerce");
        let modules: Vec<(&str, u32)> = path.modules.iter().map(|m| (m.name, m.xp)).collect();
        assert_eq!(
            modules,
            [
                ("Optimización de productos", 100),
                ("Estructura de categorías", 150),
                ("URLs amigables", 75),
                ("Rich snippets", 125),
            ]
        );
    }

    #[test]
    fn test_technical_total_xp() {
        let path = PathKey::Technical.path();
        assert_eq!(path.title, "SEO Técnico");
        let xp: Vec<u32> = path.modules.iter().map(|m| m.xp).collect();
        assert_eq!(xp, [150, 200, 125, 100]);
        assert_eq!(path.total_xp(), 575);
    }

    #[test]
    fn test_progress_is_zero_everywhere() {
        assert!(PathKey::iter().all(|k| k.path().progress == 0));
    }

    #[test]
    fn test_every_path_has_four_modules() {
        assert!(PathKey::iter().all(|k| k.path().modules.len() == 4));
    }

    #[test]
    fn test_from_key_rejects_unknown_path() {
        assert_eq!(PathKey::from_key("Technical").unwrap(), PathKey::Technical);
        let err = PathKey::from_key("social").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownPath(ref k) if k == "social"));
    }

    #[test]
    fn test_path_icons() {
        assert_eq!(PathKey::Ecommerce.icon(), Icon::ShoppingCart);
        assert_eq!(PathKey::Content.icon(), Icon::BookOpen);
        assert_eq!(PathKey::Local.icon(), Icon::Map);
        assert_eq!(PathKey::Technical.icon(), Icon::Code);
    }
}
