//! Velocity ramp.
//!
//! A linear speed step with a fixed-size deceleration window. It approximates
//! a trapezoidal profile without any kinematics: the half-pulse delay drops
//! by one microsecond every few steps until cruise, and climbs back once the
//! remaining distance enters the window.

use crate::config::RampConfig;

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the limit (position increases).
    Forward,
    /// Toward home (position decreases).
    Reverse,
}

impl Direction {
    /// Get direction from a signed step delta (zero counts as Reverse).
    #[inline]
    pub fn from_delta(delta: i64) -> Self {
        if delta > 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Mapping from logical direction to the physical DIR signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Forward drives DIR high.
    #[default]
    Normal,
    /// Forward drives DIR low.
    Inverted,
}

impl Polarity {
    /// Polarity matching an `invert_direction` flag.
    #[inline]
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::Inverted
        } else {
            Polarity::Normal
        }
    }

    /// The other polarity.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Polarity::Normal => Polarity::Inverted,
            Polarity::Inverted => Polarity::Normal,
        }
    }

    /// DIR level for a direction under this polarity.
    #[inline]
    pub fn dir_signal(self, direction: Direction) -> bool {
        (direction == Direction::Forward) != (self == Polarity::Inverted)
    }
}

/// Current phase of the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampPhase {
    /// Speeding up from `start_speed` toward `end_speed`.
    Accelerating,
    /// Holding `end_speed`.
    Cruising,
    /// Slowing back toward `start_speed` near the end of the move.
    Decelerating,
}

/// Runtime ramp state.
///
/// `speed` is the half-pulse delay in microseconds and always satisfies
/// `end_speed <= speed <= start_speed`.
#[derive(Debug, Clone)]
pub struct VelocityRamp {
    start_speed: u32,
    end_speed: u32,
    decel_window: u32,
    adjust_interval: u32,

    phase: RampPhase,
    /// Steps since the last speed change.
    counter: u32,
    speed: u32,
}

impl VelocityRamp {
    /// Create a ramp at rest from configuration.
    pub fn from_config(config: &RampConfig) -> Self {
        let start_speed = config.start_speed_us.0.max(config.end_speed_us.0);
        Self {
            start_speed,
            end_speed: config.end_speed_us.0,
            decel_window: config.decel_window_steps,
            adjust_interval: config.adjust_interval.max(1),
            phase: RampPhase::Accelerating,
            counter: 0,
            speed: start_speed,
        }
    }

    /// Current half-pulse delay in microseconds.
    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> RampPhase {
        self.phase
    }

    /// Reset for a new move: accelerating from rest.
    pub fn begin(&mut self) {
        self.phase = RampPhase::Accelerating;
        self.counter = 0;
        self.speed = self.start_speed;
    }

    /// Update speed after a step, given the steps still pending.
    ///
    /// Acceleration always runs down to `end_speed`; the switch to
    /// deceleration happens at cruise speed once `pending_steps` is inside
    /// the deceleration window.
    pub fn adjust(&mut self, pending_steps: u32) {
        if pending_steps == 0 {
            self.begin();
            return;
        }

        self.counter += 1;
        if self.counter < self.adjust_interval {
            return;
        }
        self.counter = 0;

        let in_window = pending_steps <= self.decel_window;
        match self.phase {
            RampPhase::Accelerating => {
                if self.speed > self.end_speed {
                    self.speed -= 1;
                }
                // Deceleration only starts from cruise speed.
                if self.speed == self.end_speed {
                    self.phase = if in_window {
                        RampPhase::Decelerating
                    } else {
                        RampPhase::Cruising
                    };
                }
            }
            RampPhase::Cruising => {
                if in_window {
                    self.phase = RampPhase::Decelerating;
                }
            }
            RampPhase::Decelerating => {
                if self.speed < self.start_speed {
                    self.speed += 1;
                }
            }
        }
    }
}
