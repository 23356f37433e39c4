//! Slides — a terminal slide presentation viewer.
//!
//! A fixed deck of slides, one on screen at a time, navigated with the
//! arrow keys, the previous/next buttons or the dot indicators.

pub mod config;
pub mod deck;
pub mod icons;
pub mod presentation;
pub mod tui;
