//! Slide-in transition timing.
//!
//! A transition is a horizontal offset applied to the slide card that decays
//! from the full card width to zero. The card is rendered at full size off
//! screen and copied in shifted, so its contents move without re-wrapping.
//! Forward navigation enters from the right, backward from the left.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

use crate::presentation::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub direction: Direction,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Start a transition. A zero duration means no animation.
    pub fn start(direction: Direction, duration: Duration, now: Instant) -> Option<Self> {
        if duration.is_zero() {
            return None;
        }
        Some(Self {
            direction,
            started: now,
            duration,
        })
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Columns the card is still displaced by, out of `width`.
    pub fn offset(&self, width: u16, now: Instant) -> u16 {
        // Ease-out cubic
        let remaining = (1.0 - self.progress(now)).powi(3);
        (remaining * f32::from(width)).round() as u16
    }

    /// Signed column shift for a card `width` wide: positive while entering
    /// from the right, negative while entering from the left.
    pub fn shift(&self, width: u16, now: Instant) -> i32 {
        let offset = i32::from(self.offset(width, now));
        match self.direction {
            Direction::Forward => offset,
            Direction::Backward => -offset,
        }
    }
}

/// `rect` moved `dx` columns, clipped to `clip`. Empty when fully outside.
pub fn shift_rect(rect: Rect, dx: i32, clip: Rect) -> Rect {
    let left = (i32::from(rect.x) + dx).clamp(0, i32::from(u16::MAX)) as u16;
    let right = (i32::from(rect.right()) + dx).clamp(0, i32::from(u16::MAX)) as u16;
    Rect {
        x: left,
        width: right - left,
        ..rect
    }
    .intersection(clip)
}

/// Copy every cell of `src` into `dst`, `dx` columns over, keeping only
/// cells that land inside `clip`.
pub fn blit_shifted(src: &Buffer, dst: &mut Buffer, dx: i32, clip: Rect) {
    let area = src.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let tx = i32::from(x) + dx;
            let Ok(tx) = u16::try_from(tx) else { continue };
            if !clip.contains(Position::new(tx, y)) {
                continue;
            }
            if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((tx, y))) {
                *target = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn zero_duration_disables() {
        assert!(Transition::start(Direction::Forward, Duration::ZERO, Instant::now()).is_none());
    }

    #[test]
    fn offset_decays_to_zero() {
        let t0 = Instant::now();
        let t = Transition::start(Direction::Forward, MS_300, t0).unwrap();
        assert_eq!(t.offset(80, t0), 80);

        let mut last = u16::MAX;
        for ms in (0..=300).step_by(30) {
            let off = t.offset(80, t0 + Duration::from_millis(ms));
            assert!(off <= last);
            last = off;
        }
        assert_eq!(last, 0);
        assert!(t.is_done(t0 + MS_300));
        assert!(!t.is_done(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn progress_clamped_after_end() {
        let t0 = Instant::now();
        let t = Transition::start(Direction::Backward, MS_300, t0).unwrap();
        assert_eq!(t.progress(t0 + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn forward_shifts_right_backward_shifts_left() {
        let t0 = Instant::now();
        let mid = t0 + Duration::from_millis(50);
        let fwd = Transition::start(Direction::Forward, MS_300, t0).unwrap();
        let back = Transition::start(Direction::Backward, MS_300, t0).unwrap();
        assert_eq!(fwd.shift(60, mid), i32::from(fwd.offset(60, mid)));
        assert_eq!(back.shift(60, mid), -i32::from(back.offset(60, mid)));
        assert!(fwd.shift(60, mid) > 0);
        assert_eq!(fwd.shift(60, t0 + MS_300), 0);
        assert_eq!(back.shift(60, t0 + MS_300), 0);
    }

    #[test]
    fn shift_rect_moves_without_resizing_until_clipped() {
        let screen = Rect::new(0, 0, 100, 30);
        let dot = Rect::new(40, 10, 3, 1);
        assert_eq!(shift_rect(dot, 5, screen), Rect::new(45, 10, 3, 1));
        assert_eq!(shift_rect(dot, -5, screen), Rect::new(35, 10, 3, 1));
        assert_eq!(shift_rect(dot, 58, screen), Rect::new(98, 10, 2, 1));
        assert_eq!(shift_rect(dot, -100, screen).width, 0);
    }

    #[test]
    fn blit_copies_cells_shifted_and_clipped() {
        let card = Rect::new(2, 0, 4, 1);
        let mut src = Buffer::empty(card);
        src.set_string(2, 0, "abcd", ratatui::style::Style::default());

        let screen = Rect::new(0, 0, 8, 1);
        let mut right = Buffer::empty(screen);
        blit_shifted(&src, &mut right, 3, screen);
        let row: String = (0..8).map(|x| right[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "     abc");

        let mut left = Buffer::empty(screen);
        blit_shifted(&src, &mut left, -3, screen);
        let row: String = (0..8).map(|x| left[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "bcd     ");
    }
}
