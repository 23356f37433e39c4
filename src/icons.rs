//! Icon names and the terminal glyph renderer.
//!
//! Slides refer to icons by symbolic name (`Globe`, `FileText`, ...). The
//! name set is closed: an unknown name fails deck deserialization, so the
//! renderer never sees one.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use serde::{Deserialize, Serialize};

/// Symbolic icon names understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Globe,
    FileText,
    ShieldAlert,
    Settings,
    TrendingUp,
    Mountain,
    Users,
    AlertTriangle,
    Search,
    BarChart3,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Globe,
        Icon::FileText,
        Icon::ShieldAlert,
        Icon::Settings,
        Icon::TrendingUp,
        Icon::Mountain,
        Icon::Users,
        Icon::AlertTriangle,
        Icon::Search,
        Icon::BarChart3,
        Icon::ChevronLeft,
        Icon::ChevronRight,
    ];

    /// The symbolic name, as written in deck files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Globe => "Globe",
            Icon::FileText => "FileText",
            Icon::ShieldAlert => "ShieldAlert",
            Icon::Settings => "Settings",
            Icon::TrendingUp => "TrendingUp",
            Icon::Mountain => "Mountain",
            Icon::Users => "Users",
            Icon::AlertTriangle => "AlertTriangle",
            Icon::Search => "Search",
            Icon::BarChart3 => "BarChart3",
            Icon::ChevronLeft => "ChevronLeft",
            Icon::ChevronRight => "ChevronRight",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIcon(pub String);

impl fmt::Display for UnknownIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon: {}", self.0)
    }
}

impl std::error::Error for UnknownIcon {}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Renders an icon at a nominal size. Sizes are in the deck author's units
/// (the slide badge is 48, inline chevrons are 20).
pub trait IconRenderer {
    fn render(&self, icon: Icon, size: u16) -> Text<'static>;
}

/// Sizes at or above this render as a boxed badge instead of a bare glyph.
pub const BADGE_SIZE: u16 = 32;

/// Single-width Unicode glyphs for terminals.
#[derive(Debug, Clone, Default)]
pub struct GlyphIcons {
    pub style: Style,
}

impl GlyphIcons {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn glyph(icon: Icon) -> char {
        match icon {
            Icon::Globe => '◍',
            Icon::FileText => '≡',
            Icon::ShieldAlert => '◈',
            Icon::Settings => '⚙',
            Icon::TrendingUp => '↗',
            Icon::Mountain => '▲',
            Icon::Users => '☺',
            Icon::AlertTriangle => '△',
            Icon::Search => '⌕',
            Icon::BarChart3 => '▥',
            Icon::ChevronLeft => '‹',
            Icon::ChevronRight => '›',
        }
    }
}

impl IconRenderer for GlyphIcons {
    fn render(&self, icon: Icon, size: u16) -> Text<'static> {
        let glyph = Self::glyph(icon);
        if size < BADGE_SIZE {
            return Text::from(Line::from(Span::styled(glyph.to_string(), self.style)));
        }
        Text::from(vec![
            Line::from(Span::styled("╭───╮", self.style)),
            Line::from(Span::styled(format!("│ {glyph} │"), self.style)),
            Line::from(Span::styled("╰───╯", self.style)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "Rocket".parse::<Icon>().unwrap_err();
        assert_eq!(err.to_string(), "unknown icon: Rocket");
    }

    #[test]
    fn deserializes_by_symbolic_name() {
        let icon: Icon = serde_yaml::from_str("BarChart3").unwrap();
        assert_eq!(icon, Icon::BarChart3);
        assert!(serde_yaml::from_str::<Icon>("barchart3").is_err());
    }

    #[test]
    fn small_size_is_one_line() {
        let text = GlyphIcons::default().render(Icon::ChevronLeft, 20);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].to_string(), "‹");
    }

    #[test]
    fn large_size_is_boxed_badge() {
        let text = GlyphIcons::default().render(Icon::Settings, 48);
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[1].to_string(), "│ ⚙ │");
    }
}
