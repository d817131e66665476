//! Recording hardware double with a virtual clock.

use super::HardwareIo;

/// Hardware stand-in that counts signal activity and elapses simulated time.
///
/// Works in `no_std`: everything is kept as counters, so arbitrarily long
/// moves can be simulated without allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatedHardware {
    /// Whether the driver is currently energized.
    pub enabled: bool,
    /// Current DIR level.
    pub direction_high: bool,
    /// Current STEP level.
    pub step_high: bool,

    /// Completed STEP pulses (rising edges).
    pub pulses: u64,
    /// Calls to `assert_enable`.
    pub enable_asserts: u32,
    /// Calls to `deassert_enable`.
    pub enable_deasserts: u32,
    /// Calls to `set_direction_signal`.
    pub direction_writes: u32,
    /// Calls to `yield_now`.
    pub yields: u64,
    /// Pulses emitted while the driver was not energized.
    pub pulses_while_disabled: u64,

    /// Virtual time spent in `delay_microseconds`.
    pub elapsed_us: u64,
    /// Half-pulse delay of the most recent pulse.
    pub last_half_period_us: u32,
}

impl SimulatedHardware {
    /// Fresh double: de-energized, all signals low, clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and the clock, keeping signal levels.
    pub fn reset_counters(&mut self) {
        *self = Self {
            enabled: self.enabled,
            direction_high: self.direction_high,
            step_high: self.step_high,
            ..Self::default()
        };
    }
}

impl HardwareIo for SimulatedHardware {
    fn assert_enable(&mut self) {
        self.enabled = true;
        self.enable_asserts += 1;
    }

    fn deassert_enable(&mut self) {
        self.enabled = false;
        self.enable_deasserts += 1;
    }

    fn set_direction_signal(&mut self, high: bool) {
        self.direction_high = high;
        self.direction_writes += 1;
    }

    fn set_step_signal(&mut self, high: bool) {
        if high && !self.step_high {
            self.pulses += 1;
            if !self.enabled {
                self.pulses_while_disabled += 1;
            }
        }
        self.step_high = high;
    }

    fn delay_microseconds(&mut self, us: u32) {
        self.elapsed_us += us as u64;
        if self.step_high {
            self.last_half_period_us = us;
        }
    }

    fn yield_now(&mut self) {
        self.yields += 1;
    }
}
