//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::ActuatorConfig;

/// Validate an actuator configuration.
///
/// Checks:
/// - Ramp speeds are ordered (`start >= end > 0`)
/// - Burst cap and ramp adjust interval are non-zero
/// - Travel limit is not negative
pub fn validate_config(config: &ActuatorConfig) -> Result<()> {
    let ramp = &config.ramp;
    if !ramp.is_valid() {
        return Err(Error::Config(ConfigError::InvalidSpeedRange {
            start_us: ramp.start_speed_us.0,
            end_us: ramp.end_speed_us.0,
        }));
    }

    if ramp.adjust_interval == 0 {
        return Err(Error::Config(ConfigError::InvalidAdjustInterval(
            ramp.adjust_interval,
        )));
    }

    if config.burst_cap == 0 {
        return Err(Error::Config(ConfigError::InvalidBurstCap(config.burst_cap)));
    }

    if config.travel.limit_steps.0 < 0 {
        return Err(Error::Config(ConfigError::NegativeLimit(
            config.travel.limit_steps.0,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Microseconds, Steps};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ActuatorConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_burst_cap() {
        let config = ActuatorConfig {
            burst_cap: 0, // Invalid!
            ..ActuatorConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidBurstCap(0)))
        ));
    }

    #[test]
    fn test_inverted_speed_range() {
        let mut config = ActuatorConfig::default();
        config.ramp.start_speed_us = Microseconds(400);
        config.ramp.end_speed_us = Microseconds(800);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSpeedRange {
                start_us: 400,
                end_us: 800
            }))
        ));
    }

    #[test]
    fn test_negative_limit() {
        let mut config = ActuatorConfig::default();
        config.travel.limit_steps = Steps(-1);

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NegativeLimit(-1)))
        ));
    }

    #[test]
    fn test_zero_adjust_interval() {
        let mut config = ActuatorConfig::default();
        config.ramp.adjust_interval = 0;

        assert!(validate_config(&config).is_err());
    }
}
