//! Polled two-pin quadrature decoder.
//!
//! The encoder pins are sampled once per loop iteration. Each valid Gray-code
//! transition is a quarter step; four quarter steps in the same direction make
//! one detent. Transitions that skip a state (both pins changed between polls)
//! carry no direction information and are ignored.

/// Quarter steps per detent.
const STEPS_PER_DETENT: i8 = 4;

/// Position of a pin state within the clockwise Gray sequence `00 → 10 → 11 → 01`.
#[inline]
const fn phase(
    a: bool,
    b: bool,
) -> u8 {
    match (a, b) {
        (false, false) => 0,
        (true, false) => 1,
        (true, true) => 2,
        (false, true) => 3,
    }
}

/// Quadrature decoder fed with raw pin levels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuadratureDecoder {
    phase: u8,
    quarter_steps: i8,
}

impl QuadratureDecoder {
    /// Start from the current pin levels.
    pub const fn new(
        a: bool,
        b: bool,
    ) -> Self {
        Self {
            phase: phase(a, b),
            quarter_steps: 0,
        }
    }

    /// Feed the latest pin levels. Returns `+1` or `-1` when a detent completes,
    /// otherwise `0`.
    pub fn update(
        &mut self,
        a: bool,
        b: bool,
    ) -> i32 {
        let next = phase(a, b);
        match (next + 4 - self.phase) % 4 {
            1 => self.quarter_steps += 1,
            3 => self.quarter_steps -= 1,
            _ => {}
        }
        self.phase = next;

        if self.quarter_steps >= STEPS_PER_DETENT {
            self.quarter_steps -= STEPS_PER_DETENT;
            1
        } else if self.quarter_steps <= -STEPS_PER_DETENT {
            self.quarter_steps += STEPS_PER_DETENT;
            -1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCKWISE: [(bool, bool); 4] = [(true, false), (true, true), (false, true), (false, false)];

    fn feed(
        decoder: &mut QuadratureDecoder,
        states: impl IntoIterator<Item = (bool, bool)>,
    ) -> i32 {
        states.into_iter().map(|(a, b)| decoder.update(a, b)).sum()
    }

    #[test]
    fn test_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(feed(&mut decoder, CLOCKWISE), 1);
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(feed(&mut decoder, CLOCKWISE.iter().rev().skip(1).copied().chain([(false, false)])), -1);
    }

    #[test]
    fn test_partial_turn_reports_nothing() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(feed(&mut decoder, CLOCKWISE[..3].iter().copied()), 0);
    }

    #[test]
    fn test_repeated_state_is_ignored() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(decoder.update(false, false), 0);
        assert_eq!(feed(&mut decoder, CLOCKWISE), 1);
    }

    #[test]
    fn test_skipped_state_is_ignored() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(decoder.update(true, true), 0);
        assert_eq!(decoder.update(false, false), 0);
        assert_eq!(feed(&mut decoder, CLOCKWISE), 1);
    }

    #[test]
    fn test_several_detents() {
        let mut decoder = QuadratureDecoder::new(false, false);
        let turns = CLOCKWISE.iter().copied().cycle().take(12);
        assert_eq!(feed(&mut decoder, turns), 3);
    }
}
