//! embedded-hal 1.0 adapter.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::HardwareIo;

/// STEP/DIR/ENABLE driver wired to GPIO pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: ENABLE pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct PinHardware<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    step_pin: STEP,
    dir_pin: DIR,
    enable_pin: EN,
    delay: DELAY,

    /// ENABLE is asserted by driving the pin low.
    enable_active_low: bool,
}

impl<STEP, DIR, EN, DELAY> PinHardware<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Wrap the pins. The driver is left de-energized.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        delay: DELAY,
        enable_active_low: bool,
    ) -> Self {
        let mut hw = Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            enable_active_low,
        };
        hw.deassert_enable();
        hw
    }

    /// Give the pins and delay back.
    pub fn release(self) -> (STEP, DIR, EN, DELAY) {
        (self.step_pin, self.dir_pin, self.enable_pin, self.delay)
    }

    fn write_enable(&mut self, energized: bool) {
        // Pin errors are dropped, see `HardwareIo`.
        let _ = if energized != self.enable_active_low {
            self.enable_pin.set_high()
        } else {
            self.enable_pin.set_low()
        };
    }
}

impl<STEP, DIR, EN, DELAY> HardwareIo for PinHardware<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn assert_enable(&mut self) {
        self.write_enable(true);
    }

    fn deassert_enable(&mut self) {
        self.write_enable(false);
    }

    fn set_direction_signal(&mut self, high: bool) {
        let _ = if high {
            self.dir_pin.set_high()
        } else {
            self.dir_pin.set_low()
        };
    }

    fn set_step_signal(&mut self, high: bool) {
        let _ = if high {
            self.step_pin.set_high()
        } else {
            self.step_pin.set_low()
        };
    }

    #[inline]
    fn delay_microseconds(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_active_low_enable() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let enable = PinMock::new(&[
            Transaction::set(State::High), // de-energized on construction
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);

        let mut hw = PinHardware::new(step, dir, enable, NoopDelay::new(), true);
        hw.assert_enable();
        hw.deassert_enable();

        let (mut step, mut dir, mut enable, _) = hw.release();
        step.done();
        dir.done();
        enable.done();
    }

    #[test]
    fn test_active_high_enable() {
        let step = PinMock::new(&[]);
        let dir = PinMock::new(&[]);
        let enable = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);

        let mut hw = PinHardware::new(step, dir, enable, NoopDelay::new(), false);
        hw.assert_enable();

        let (mut step, mut dir, mut enable, _) = hw.release();
        step.done();
        dir.done();
        enable.done();
    }

    #[test]
    fn test_step_and_direction_signals() {
        let step = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let dir = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);
        let enable = PinMock::new(&[Transaction::set(State::High)]);

        let mut hw = PinHardware::new(step, dir, enable, NoopDelay::new(), true);
        hw.set_direction_signal(false);
        hw.set_direction_signal(true);
        hw.set_step_signal(true);
        hw.delay_microseconds(490);
        hw.set_step_signal(false);

        let (mut step, mut dir, mut enable, _) = hw.release();
        step.done();
        dir.done();
        enable.done();
    }
}
