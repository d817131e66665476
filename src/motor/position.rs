//! Position tracking for the blinds motor.
//!
//! Provides absolute position in steps together with the travel limit it is
//! checked against.

use crate::config::units::{Percent, Steps};
use crate::motion::Direction;

/// Open-loop position tracker.
///
/// Counts pulses; there is no encoder, so the count is only as good as the
/// last `home()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Current position in steps (from origin)
    steps: Steps,
    /// Far end of travel in steps
    limit: Steps,
}

impl Position {
    /// Create a tracker at the origin.
    #[inline]
    pub fn new(limit: Steps) -> Self {
        Self {
            steps: Steps::default(),
            limit,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get the travel limit in steps.
    #[inline]
    pub fn limit(&self) -> Steps {
        self.limit
    }

    /// Record one step taken in `direction`.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        self.steps = self.steps + Steps(direction.sign());
    }

    /// Declare the current position to be the origin.
    #[inline]
    pub fn home(&mut self) {
        self.steps = Steps::default();
    }

    /// Declare the current position to be the far end of travel.
    #[inline]
    pub fn set_limit_here(&mut self) {
        self.limit = self.steps;
    }

    /// Current position as a percentage of travel (0 when the limit is 0).
    pub fn percent(&self) -> Percent {
        if self.limit.0 <= 0 {
            return Percent::CLOSED;
        }
        let percent = self.steps.0.saturating_mul(100) / self.limit.0;
        Percent(percent.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(steps: Steps, limit: Steps) -> Position {
        Position { steps, limit }
    }

    #[test]
    fn test_position_tracking() {
        let mut pos = Position::new(Steps(24000));
        assert_eq!(pos.steps().value(), 0);

        pos.advance(Direction::Forward);
        pos.advance(Direction::Forward);
        pos.advance(Direction::Reverse);
        assert_eq!(pos.steps().value(), 1);
    }

    #[test]
    fn test_home_and_set_limit() {
        let mut pos = at(Steps(18000), Steps(24000));
        pos.set_limit_here();
        assert_eq!(pos.limit(), Steps(18000));

        pos.home();
        assert_eq!(pos.steps(), Steps(0));
        assert_eq!(pos.limit(), Steps(18000));
    }

    #[test]
    fn test_percent_of_travel() {
        assert_eq!(at(Steps(12000), Steps(24000)).percent(), Percent(50));
        assert_eq!(at(Steps(24000), Steps(24000)).percent(), Percent::OPEN);
        assert_eq!(at(Steps(5), Steps(0)).percent(), Percent::CLOSED);
    }
}
