//! Position planner: percentage target to direction and step count.

use crate::config::units::{Percent, Steps};

use super::profile::Direction;

/// A planned move relative to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovePlan {
    /// Direction to travel.
    pub direction: Direction,
    /// Steps to travel (saturates at `u32::MAX`).
    pub steps: u32,
    /// Absolute target position. May lie outside `[0, limit]`.
    pub target: Steps,
}

impl MovePlan {
    /// Whether the plan moves at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

/// Plan a move from `position` to `target` percent of `limit`.
///
/// Percentages outside `0..=100` are not rejected; they extrapolate past the
/// travel range and the travel guard stops the motor at the bound.
pub fn plan(position: Steps, limit: Steps, target: Percent) -> MovePlan {
    let target = target.to_steps(limit);
    let delta = target.0.saturating_sub(position.0);

    MovePlan {
        direction: Direction::from_delta(delta),
        steps: u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX),
        target,
    }
}
