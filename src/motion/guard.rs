//! Travel guard.

use crate::config::units::Steps;

use super::profile::Direction;

/// Whether the next step in `direction` must be refused.
///
/// Travel is `[0, limit]`. The guard runs before every step, so a move can
/// never leave the range regardless of what the planner asked for.
#[inline]
pub fn at_limit(position: Steps, direction: Direction, limit: Steps) -> bool {
    match direction {
        Direction::Forward => position >= limit,
        Direction::Reverse => position <= Steps(0),
    }
}
