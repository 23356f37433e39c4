//! Presentation state — which slide is showing and how we got there.
//!
//! The only mutable state in the viewer. Navigation never fails: requests
//! past either end, or to an index outside the deck, leave the state alone.

use tracing::debug;

/// Direction of the last navigation. Selects the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Current index into a deck of `len` slides, plus the last direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    len: usize,
    current: usize,
    direction: Direction,
}

impl Presentation {
    /// Start at the first slide, moving forward. `len` is clamped to at least 1.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            current: 0,
            direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// One-based position and total, for the "3 / 10" counter.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.len)
    }

    /// Advance one slide. Returns false (and changes nothing) on the last slide.
    pub fn go_next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.direction = Direction::Forward;
        self.current += 1;
        debug!(index = self.current, "next slide");
        true
    }

    /// Step back one slide. Returns false (and changes nothing) on the first slide.
    pub fn go_previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.direction = Direction::Backward;
        self.current -= 1;
        debug!(index = self.current, "previous slide");
        true
    }

    /// Jump to `index`. Anything not strictly ahead counts as backward,
    /// including the current slide itself. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "jump out of range ignored");
            return false;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        debug!(index, direction = ?self.direction, "jump to slide");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 10;

    fn at(index: usize) -> Presentation {
        let mut p = Presentation::new(N);
        p.go_to(index);
        p
    }

    #[test]
    fn starts_at_first_slide_forward() {
        let p = Presentation::new(N);
        assert_eq!(p.current(), 0);
        assert_eq!(p.direction(), Direction::Forward);
        assert_eq!(p.position(), (1, 10));
        assert!(p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn next_from_every_slide() {
        for i in 0..N - 1 {
            let mut p = at(i);
            assert!(p.go_next());
            assert_eq!(p.current(), i + 1);
            assert_eq!(p.direction(), Direction::Forward);
        }
        let mut p = at(N - 1);
        assert!(!p.go_next());
        assert_eq!(p.current(), N - 1);
    }

    #[test]
    fn previous_from_every_slide() {
        for i in 1..N {
            let mut p = at(i);
            assert!(p.go_previous());
            assert_eq!(p.current(), i - 1);
            assert_eq!(p.direction(), Direction::Backward);
        }
        let mut p = at(0);
        assert!(!p.go_previous());
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn go_to_lands_exactly() {
        for start in 0..N {
            for target in 0..N {
                let mut p = at(start);
                assert!(p.go_to(target));
                assert_eq!(p.current(), target);
                let expected = if target > start {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                assert_eq!(p.direction(), expected);
            }
        }
    }

    #[test]
    fn go_to_out_of_range_ignored() {
        let mut p = at(4);
        let before = p.clone();
        assert!(!p.go_to(N));
        assert!(!p.go_to(usize::MAX));
        assert_eq!(p, before);
    }

    #[test]
    fn repeated_noops_never_change_state() {
        let mut p = at(N - 1);
        let before = p.clone();
        for _ in 0..50 {
            p.go_next();
        }
        assert_eq!(p, before);

        let mut p = Presentation::new(N);
        let before = p.clone();
        for _ in 0..50 {
            p.go_previous();
        }
        assert_eq!(p, before);
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_sequence() {
        let mut p = Presentation::new(N);
        // Deterministic pseudo-random walk
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..1000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 3 {
                0 => {
                    p.go_next();
                }
                1 => {
                    p.go_previous();
                }
                _ => {
                    p.go_to((seed as usize / 3) % (N + 2));
                }
            }
            assert!(p.current() < N);
        }
    }

    #[test]
    fn single_slide_deck_is_first_and_last() {
        let mut p = Presentation::new(1);
        assert!(p.is_first() && p.is_last());
        assert!(!p.go_next());
        assert!(!p.go_previous());
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn zero_len_clamped_to_one() {
        let mut p = Presentation::new(0);
        assert_eq!(p.position(), (1, 1));
        assert!(!p.go_to(1));
    }
}
