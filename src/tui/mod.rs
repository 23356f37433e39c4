//! The viewer — ratatui TUI presentation layer.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (`layout::draw`).
//! Immediate mode: every frame is rebuilt from the model. The view records
//! where clickable controls landed so mouse input can be hit-tested against
//! the frame the user actually saw.

pub mod app;
pub mod button;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
pub mod transition;
