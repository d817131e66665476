//! Diagnostic snapshot of the motor state.

use crate::config::units::{Percent, Steps};
use crate::motion::{Direction, Polarity, RampPhase};

/// Copyable view of everything the control layer may want to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorStatus {
    /// Absolute position in steps.
    pub position: Steps,
    /// Far end of travel in steps.
    pub limit: Steps,
    /// Position as a percentage of travel.
    pub percent: Percent,
    /// Steps left in the current background move (0 when idle).
    pub pending_steps: u32,
    /// Current half-pulse delay in microseconds.
    pub speed_us: u32,
    /// Last commanded direction.
    pub direction: Direction,
    /// Current DIR polarity.
    pub polarity: Polarity,
    /// Current ramp phase.
    pub phase: RampPhase,
}

impl MotorStatus {
    /// Check if no move is pending.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending_steps == 0
    }
}
