//! Burn-in protection oscillator.
//!
//! Nudges the floating panel horizontally between 0 and a configured maximum,
//! one step per timer tick, reversing direction at each bound.

use crate::config::settings::BurnIn;

#[derive(Debug, Clone)]
pub struct Oscillator {
    offset: u32,
    direction: i64,
    step: u32,
    max_offset: u32,
}

impl Oscillator {
    pub fn new(config: &BurnIn) -> Self {
        Self {
            offset: 0,
            direction: 1,
            step: config.step,
            max_offset: config.max_offset,
        }
    }

    /// Current shift away from the rest position, in pixels.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Advance one step. The offset is clamped to `[0, max_offset]` and the
    /// direction flips exactly at each bound.
    pub fn tick(&mut self) -> u32 {
        let next = self.offset as i64 + self.direction * self.step as i64;
        if next >= self.max_offset as i64 {
            self.offset = self.max_offset;
            self.direction = -1;
        } else if next <= 0 {
            self.offset = 0;
            self.direction = 1;
        } else {
            self.offset = next as u32;
        }
        self.offset
    }

    /// Back to the rest position, moving outward again. Called when history
    /// navigation fires.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.direction = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oscillator(step: u32, max_offset: u32) -> Oscillator {
        Oscillator::new(&BurnIn {
            enabled: true,
            step,
            max_offset,
            interval_ms: 10,
        })
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        for (step, max) in [(1, 10), (3, 10), (7, 100), (10, 10), (13, 40)] {
            let mut osc = oscillator(step, max);
            for _ in 0..1000 {
                let offset = osc.tick();
                assert!(offset <= max, "step {} max {}: offset {}", step, max, offset);
            }
        }
    }

    #[test]
    fn test_direction_flips_exactly_at_bounds() {
        let mut osc = oscillator(3, 10);
        let mut previous = 0u32;
        let mut rising = true;
        for _ in 0..100 {
            let offset = osc.tick();
            if rising && offset < previous {
                // the turn can only happen after touching the bound
                assert_eq!(previous, 10);
                rising = false;
            } else if !rising && offset > previous {
                assert_eq!(previous, 0);
                rising = true;
            }
            previous = offset;
        }
    }

    #[test]
    fn test_step_larger_than_max_clamps() {
        let mut osc = oscillator(50, 10);
        assert_eq!(osc.tick(), 10);
        assert_eq!(osc.tick(), 0);
        assert_eq!(osc.tick(), 10);
    }

    #[test]
    fn test_zero_max_never_moves() {
        let mut osc = oscillator(5, 0);
        for _ in 0..10 {
            assert_eq!(osc.tick(), 0);
        }
    }

    #[test]
    fn test_reset_restarts_from_zero() {
        let mut osc = oscillator(4, 20);
        for _ in 0..7 {
            osc.tick();
        }
        osc.reset();
        assert_eq!(osc.offset(), 0);
        assert_eq!(osc.tick(), 4);
    }
}
