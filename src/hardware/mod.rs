//! Hardware capability consumed by the motion core.
//!
//! The core only ever drives three signals (ENABLE, DIR, STEP) and waits.
//! [`PinHardware`] maps those onto embedded-hal 1.0 pins; [`SimulatedHardware`]
//! records them and advances a virtual clock instead of sleeping.

mod pins;
mod simulated;

pub use pins::PinHardware;
pub use simulated::SimulatedHardware;

/// Pin and timing primitives used by the motor.
///
/// Calls are infallible; adapters drop pin errors.
pub trait HardwareIo {
    /// Energize the driver.
    fn assert_enable(&mut self);

    /// De-energize the driver.
    fn deassert_enable(&mut self);

    /// Drive the DIR signal (`true` = high).
    fn set_direction_signal(&mut self, high: bool);

    /// Drive the STEP signal (`true` = high).
    fn set_step_signal(&mut self, high: bool);

    /// Busy-wait for `us` microseconds.
    fn delay_microseconds(&mut self, us: u32);

    /// Give a cooperative scheduler a chance to run (watchdog feeding etc).
    ///
    /// Called once after every step. Does nothing by default.
    #[inline]
    fn yield_now(&mut self) {}
}

impl<T: HardwareIo + ?Sized> HardwareIo for &mut T {
    #[inline]
    fn assert_enable(&mut self) {
        (**self).assert_enable()
    }

    #[inline]
    fn deassert_enable(&mut self) {
        (**self).deassert_enable()
    }

    #[inline]
    fn set_direction_signal(&mut self, high: bool) {
        (**self).set_direction_signal(high)
    }

    #[inline]
    fn set_step_signal(&mut self, high: bool) {
        (**self).set_step_signal(high)
    }

    #[inline]
    fn delay_microseconds(&mut self, us: u32) {
        (**self).delay_microseconds(us)
    }

    #[inline]
    fn yield_now(&mut self) {
        (**self).yield_now()
    }
}
