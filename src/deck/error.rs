//! Deck loading error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck has no slides")]
    Empty,

    #[error("slide at position {position} has id {found}, expected {expected}")]
    IdMismatch {
        position: usize,
        expected: u32,
        found: u32,
    },

    #[error("slide {0} has an empty title")]
    EmptyTitle(u32),

    #[error("slide {0} has empty content")]
    EmptyContent(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type DeckResult<T> = Result<T, DeckError>;
