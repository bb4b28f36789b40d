//! Icon glyphs

/// The closed set of icons the dashboard draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Icon {
    ShoppingCart,
    BookOpen,
    Map,
    Code,
    Trophy,
    Palette,
}

impl Icon {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ShoppingCart => "🛒",
            Icon::BookOpen => "📖",
            Icon::Map => "📍",
            Icon::Code => "</>",
            Icon::Trophy => "🏆",
            Icon::Palette => "🎨",
        }
    }
}
