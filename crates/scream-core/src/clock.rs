use crate::constants::{MAX_TICKS_PER_FRAME, TICK_HZ};
use std::time::Duration;

/// Turns variable frame times into a whole number of fixed simulation ticks.
///
/// Leftover time carries into the next frame. When a frame asks for more than
/// `max_ticks` (tab was hidden, debugger pause) the backlog is dropped.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_HZ, MAX_TICKS_PER_FRAME)
    }
}

impl FixedStep {
    pub fn new(hz: f64, max_ticks: u32) -> Self {
        Self {
            step: Duration::from_secs_f64(1.0 / hz.max(1.0)),
            accumulator: Duration::ZERO,
            max_ticks: max_ticks.max(1),
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of ticks to run for a frame that took `dt`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if self.accumulator >= self.step {
            log::debug!(
                "[clock] dropping {:.1} ms backlog",
                self.accumulator.as_secs_f64() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder_between_frames() {
        let mut clock = FixedStep::new(100.0, 5); // 10 ms step
        assert_eq!(clock.advance(Duration::from_millis(6)), 0);
        assert_eq!(clock.advance(Duration::from_millis(6)), 1);
        assert_eq!(clock.advance(Duration::from_millis(8)), 1);
        assert_eq!(clock.advance(Duration::from_millis(25)), 2);
    }

    #[test]
    fn caps_catch_up_and_drops_backlog() {
        let mut clock = FixedStep::new(100.0, 3);
        assert_eq!(clock.advance(Duration::from_secs(2)), 3);
        assert_eq!(clock.advance(Duration::from_millis(5)), 0);
    }
}
