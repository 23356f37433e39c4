//! The slide deck — an ordered, immutable list of slides.
//!
//! A `Deck` is validated once at construction and never changes afterwards.
//! Every deck holds at least one slide and slide ids run 1..=N in position
//! order, so callers can address slides by position without checks beyond
//! `index < len()`.

mod builtin;
pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::icons::Icon;

pub use error::{DeckError, DeckResult};

/// One slide of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub icon: Icon,
}

/// On-disk deck file shape.
#[derive(Debug, Deserialize)]
struct DeckFile {
    slides: Vec<Slide>,
}

/// A validated, non-empty, ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate and wrap a list of slides.
    pub fn new(slides: Vec<Slide>) -> DeckResult<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (position, slide) in slides.iter().enumerate() {
            let expected = position as u32 + 1;
            if slide.id != expected {
                return Err(DeckError::IdMismatch {
                    position,
                    expected,
                    found: slide.id,
                });
            }
            if slide.title.trim().is_empty() {
                return Err(DeckError::EmptyTitle(slide.id));
            }
            if slide.content.trim().is_empty() {
                return Err(DeckError::EmptyContent(slide.id));
            }
        }
        Ok(Self { slides })
    }

    /// The compiled-in ten-slide deck.
    pub fn builtin() -> Self {
        Self {
            slides: builtin::slides(),
        }
    }

    /// Parse a deck from YAML text.
    pub fn from_yaml(yaml: &str) -> DeckResult<Self> {
        let file: DeckFile = serde_yaml::from_str(yaml)?;
        Self::new(file.slides)
    }

    /// Load a deck from a YAML file.
    pub fn load(path: &Path) -> DeckResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let deck = Self::from_yaml(&yaml)?;
        debug!(path = %path.display(), slides = deck.len(), "deck loaded");
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// "1. Title" lines for every slide.
    pub fn outline(&self) -> String {
        self.slides
            .iter()
            .map(|s| format!("{}. {}", s.id, s.title))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slide(id: u32, title: &str, content: &str) -> Slide {
        Slide {
            id,
            title: title.into(),
            content: content.into(),
            icon: Icon::Globe,
        }
    }

    #[test]
    fn builtin_has_ten_valid_slides() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 10);
        // Same rules as any loaded deck
        assert_eq!(Deck::new(deck.iter().cloned().collect()).unwrap(), deck);
        assert_eq!(deck.get(0).unwrap().title, "Область применения");
        assert_eq!(deck.get(9).unwrap().icon, Icon::BarChart3);
        assert!(deck.get(10).is_none());
    }

    #[test]
    fn builtin_ids_follow_positions() {
        for (i, s) in Deck::builtin().iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
    }

    #[test]
    fn empty_deck_rejected() {
        assert!(matches!(Deck::new(vec![]), Err(DeckError::Empty)));
    }

    #[test]
    fn id_gap_rejected() {
        let err = Deck::new(vec![slide(1, "a", "b"), slide(3, "c", "d")]).unwrap_err();
        match err {
            DeckError::IdMismatch {
                position,
                expected,
                found,
            } => {
                assert_eq!(position, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_text_rejected() {
        assert!(matches!(
            Deck::new(vec![slide(1, "  ", "body")]),
            Err(DeckError::EmptyTitle(1))
        ));
        assert!(matches!(
            Deck::new(vec![slide(1, "title", "")]),
            Err(DeckError::EmptyContent(1))
        ));
    }

    #[test]
    fn from_yaml_parses_slides() {
        let yaml = r#"
slides:
  - id: 1
    title: Intro
    content: Hello there.
    icon: Globe
  - id: 2
    title: Numbers
    content: Some charts.
    icon: BarChart3
"#;
        let deck = Deck::from_yaml(yaml).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(1).unwrap().icon, Icon::BarChart3);
    }

    #[test]
    fn unknown_icon_fails_to_load() {
        let yaml = r#"
slides:
  - id: 1
    title: Intro
    content: Hello there.
    icon: Rocket
"#;
        assert!(matches!(Deck::from_yaml(yaml), Err(DeckError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(
            &path,
            "slides:\n  - id: 1\n    title: Only\n    content: One slide.\n    icon: Users\n",
        )
        .unwrap();
        let deck = Deck::load(&path).unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Deck::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn outline_lists_titles() {
        let deck = Deck::new(vec![slide(1, "One", "x"), slide(2, "Two", "y")]).unwrap();
        assert_eq!(deck.outline(), "1. One\n2. Two");
    }
}
