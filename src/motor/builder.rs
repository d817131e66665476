//! Builder pattern for BlindsMotor on embedded-hal pins.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Steps;
use crate::config::{validate_config, ActuatorConfig, RampConfig};
use crate::error::{Error, MotorError, Result};
use crate::hardware::PinHardware;

use super::driver::BlindsMotor;

/// Builder for creating BlindsMotor instances wired to GPIO pins.
pub struct BlindsMotorBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    delay: Option<DELAY>,
    config: ActuatorConfig,
}

impl<STEP, DIR, EN, DELAY> Default for BlindsMotorBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN, DELAY> BlindsMotorBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            delay: None,
            config: ActuatorConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the ENABLE pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name. Names over 32 bytes are ignored.
    pub fn name(mut self, name: &str) -> Self {
        if let Ok(name) = heapless::String::try_from(name) {
            self.config.name = name;
        }
        self
    }

    /// Set the travel limit in steps.
    pub fn limit(mut self, limit: Steps) -> Self {
        self.config.travel.limit_steps = limit;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.config.travel.invert_direction = invert;
        self
    }

    /// Set the velocity ramp.
    pub fn ramp(mut self, ramp: RampConfig) -> Self {
        self.config.ramp = ramp;
        self
    }

    /// Set the max steps per `service()` call.
    pub fn burst_cap(mut self, cap: u32) -> Self {
        self.config.burst_cap = cap;
        self
    }

    /// Set the ENABLE polarity.
    pub fn enable_active_low(mut self, active_low: bool) -> Self {
        self.config.enable_active_low = active_low;
        self
    }

    /// Configure from an ActuatorConfig, replacing every setting so far.
    pub fn config(mut self, config: &ActuatorConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Build the BlindsMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the delay is missing, or if the
    /// configuration does not validate.
    pub fn build(self) -> Result<BlindsMotor<PinHardware<STEP, DIR, EN, DELAY>>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Motor(MotorError::MissingComponent("step_pin")))?;
        let dir_pin = self
            .dir_pin
            .ok_or(Error::Motor(MotorError::MissingComponent("dir_pin")))?;
        let enable_pin = self
            .enable_pin
            .ok_or(Error::Motor(MotorError::MissingComponent("enable_pin")))?;
        let delay = self
            .delay
            .ok_or(Error::Motor(MotorError::MissingComponent("delay")))?;

        validate_config(&self.config)?;

        let hw = PinHardware::new(
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            self.config.enable_active_low,
        );
        Ok(BlindsMotor::new(hw, &self.config))
    }
}

impl<STEP, DIR, EN, DELAY> BlindsMotor<PinHardware<STEP, DIR, EN, DELAY>>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Start building a motor on GPIO pins.
    pub fn builder() -> BlindsMotorBuilder<STEP, DIR, EN, DELAY> {
        BlindsMotorBuilder::new()
    }
}
