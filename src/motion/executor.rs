//! Move state machine and burst bookkeeping.

use crate::config::units::Percent;

use super::planner::MovePlan;

/// Outcome of one bounded run of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstResult {
    /// Steps actually taken.
    pub executed: u32,
    /// The travel guard stopped the burst before `count` steps.
    pub limited: bool,
}

impl BurstResult {
    /// Combine two consecutive bursts.
    #[inline]
    pub fn then(self, next: BurstResult) -> BurstResult {
        BurstResult {
            executed: self.executed + next.executed,
            limited: self.limited || next.limited,
        }
    }
}

/// How a move request is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveMode {
    /// Block until the move is done.
    Sync,
    /// Arm the move and let `service()` step it in bursts.
    Async,
}

/// A position command as received from the control layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    /// Target as a percentage of travel (unclamped).
    pub target_percent: Percent,
    /// Execution mode.
    pub mode: MoveMode,
}

impl MoveRequest {
    /// Blocking move to `percent`.
    pub fn sync(percent: impl Into<Percent>) -> Self {
        Self {
            target_percent: percent.into(),
            mode: MoveMode::Sync,
        }
    }

    /// Background move to `percent`.
    pub fn background(percent: impl Into<Percent>) -> Self {
        Self {
            target_percent: percent.into(),
            mode: MoveMode::Async,
        }
    }
}

/// What a [`MoveRequest`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// A sync move ran to completion or to the travel limit.
    Finished(BurstResult),
    /// An async move was armed and awaits `service()`.
    Started(MovePlan),
}

/// Runtime move state.
///
/// ```text
/// Idle --arm(n > 0)--> Moving { n } --step()*--> Moving { 0 } == Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveState {
    /// No move pending.
    #[default]
    Idle,
    /// A move with steps still to take.
    Moving {
        /// Remaining steps, always > 0.
        pending_steps: u32,
    },
}

impl MoveState {
    /// State holding `pending_steps` (Idle when zero).
    #[inline]
    pub fn with_pending(pending_steps: u32) -> Self {
        if pending_steps == 0 {
            MoveState::Idle
        } else {
            MoveState::Moving { pending_steps }
        }
    }

    /// Remaining steps, zero when idle.
    #[inline]
    pub fn pending_steps(&self) -> u32 {
        match self {
            MoveState::Idle => 0,
            MoveState::Moving { pending_steps } => *pending_steps,
        }
    }

    /// Check if no move is pending.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, MoveState::Idle)
    }

    /// Account for one step taken. Returns the steps still pending.
    pub fn step(&mut self) -> u32 {
        *self = MoveState::with_pending(self.pending_steps().saturating_sub(1));
        self.pending_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_runs_down_to_idle() {
        let mut state = MoveState::with_pending(3);
        assert!(!state.is_idle());

        assert_eq!(state.step(), 2);
        assert_eq!(state.step(), 1);
        assert_eq!(state.step(), 0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_step_when_idle_stays_idle() {
        let mut state = MoveState::Idle;
        assert_eq!(state.step(), 0);
        assert_eq!(state, MoveState::Idle);
    }

    #[test]
    fn test_zero_pending_is_idle() {
        assert_eq!(MoveState::with_pending(0), MoveState::Idle);
        assert_eq!(MoveState::with_pending(5).pending_steps(), 5);
    }

    #[test]
    fn test_burst_then() {
        let a = BurstResult { executed: 200, limited: false };
        let b = BurstResult { executed: 50, limited: true };
        assert_eq!(a.then(b), BurstResult { executed: 250, limited: true });
    }

    #[test]
    fn test_request_constructors() {
        assert_eq!(MoveRequest::sync(40).mode, MoveMode::Sync);
        let req = MoveRequest::background(Percent(75));
        assert_eq!(req.mode, MoveMode::Async);
        assert_eq!(req.target_percent, Percent(75));
    }
}
