//! TuiApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets; the only thing it writes
//! back is where clickable controls landed on screen.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};

use crate::deck::{Deck, Slide};
use crate::icons::{GlyphIcons, IconRenderer};
use crate::presentation::Presentation;

use super::event::TuiMessage;
use super::transition::Transition;

/// What a screen position maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Previous,
    Next,
    Dot(usize),
}

/// Clickable regions from the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub previous: Rect,
    pub next: Rect,
    /// One per slide, in deck order.
    pub dots: Vec<Rect>,
}

impl HitAreas {
    pub fn target_at(&self, pos: Position) -> Option<HitTarget> {
        if self.previous.contains(pos) {
            return Some(HitTarget::Previous);
        }
        if self.next.contains(pos) {
            return Some(HitTarget::Next);
        }
        self.dots
            .iter()
            .position(|r| r.contains(pos))
            .map(HitTarget::Dot)
    }
}

/// The main TUI application state (TEA model).
pub struct TuiApp {
    /// The slides being shown. Never changes after construction.
    pub deck: Deck,
    /// Current index and last direction.
    pub presentation: Presentation,
    /// Running slide-in animation, if any.
    pub transition: Option<Transition>,
    /// Length of each slide-in animation. Zero disables animation.
    pub transition_duration: Duration,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Control positions recorded by the renderer.
    pub hit_areas: HitAreas,
    /// Icon collaborator.
    pub icons: Box<dyn IconRenderer>,
}

impl TuiApp {
    pub fn new(deck: Deck, transition_duration: Duration) -> Self {
        let presentation = Presentation::new(deck.len());
        Self {
            deck,
            presentation,
            transition: None,
            transition_duration,
            should_quit: false,
            hit_areas: HitAreas::default(),
            icons: Box::new(GlyphIcons::new(Style::default().fg(Color::Cyan))),
        }
    }

    /// Swap in a different icon renderer.
    pub fn with_icons(mut self, icons: impl IconRenderer + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    /// The slide at the current index.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.presentation.current())
    }

    pub fn next(&mut self) {
        if self.presentation.go_next() {
            self.start_transition();
        }
    }

    pub fn previous(&mut self) {
        if self.presentation.go_previous() {
            self.start_transition();
        }
    }

    pub fn jump(&mut self, index: usize) {
        if self.presentation.go_to(index) {
            self.start_transition();
        }
    }

    fn start_transition(&mut self) {
        self.transition = Transition::start(
            self.presentation.direction(),
            self.transition_duration,
            Instant::now(),
        );
    }

    /// Drop the transition once it has played out.
    pub fn settle_transition(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_done(now)) {
            self.transition = None;
        }
    }

    /// Act on a click target.
    pub fn activate(&mut self, target: HitTarget) {
        match target {
            HitTarget::Previous => self.previous(),
            HitTarget::Next => self.next(),
            HitTarget::Dot(index) => self.jump(index),
        }
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => super::input::handle_key(self, key),
            TuiMessage::Mouse(mouse) => super::input::handle_mouse(self, mouse),
            TuiMessage::Quit => self.should_quit = true,
        }
    }
}
