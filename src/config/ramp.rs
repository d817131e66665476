//! Velocity ramp configuration.

use serde::Deserialize;

use super::units::Microseconds;

/// Half-pulse delay at rest.
pub const DEFAULT_START_SPEED_US: u32 = 490;
/// Half-pulse delay at cruise.
pub const DEFAULT_END_SPEED_US: u32 = 490;
/// Steps reserved at the end of a move for deceleration.
pub const DEFAULT_DECEL_WINDOW_STEPS: u32 = 600;
/// Steps between two one-microsecond speed adjustments.
pub const DEFAULT_ADJUST_INTERVAL: u32 = 3;

/// Linear speed ramp parameters.
///
/// Speeds are half-pulse delays, so `start_speed_us` (slow) is the larger
/// value and `end_speed_us` (fast) the smaller one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    /// Half-pulse delay at rest.
    pub start_speed_us: Microseconds,

    /// Half-pulse delay at cruise.
    pub end_speed_us: Microseconds,

    /// Once this many steps or fewer remain, the ramp decelerates.
    pub decel_window_steps: u32,

    /// Speed changes at most once per this many steps.
    pub adjust_interval: u32,
}

impl RampConfig {
    /// A ramp that never changes speed.
    pub fn constant(speed: Microseconds) -> Self {
        Self {
            start_speed_us: speed,
            end_speed_us: speed,
            ..Self::default()
        }
    }

    /// Check the speed bounds (`start >= end > 0`).
    pub fn is_valid(&self) -> bool {
        self.end_speed_us.0 > 0 && self.start_speed_us >= self.end_speed_us
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start_speed_us: Microseconds(DEFAULT_START_SPEED_US),
            end_speed_us: Microseconds(DEFAULT_END_SPEED_US),
            decel_window_steps: DEFAULT_DECEL_WINDOW_STEPS,
            adjust_interval: DEFAULT_ADJUST_INTERVAL,
        }
    }
}
