//! Unit tests for configuration validation.

use blinds_motion::config::{parse_config, validate_config, ActuatorConfig};
use blinds_motion::error::{ConfigError, Error};

/// Test validation of the reference configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
name = "bedroom"

[travel]
limit_steps = 24000

[ramp]
start_speed_us = 490
end_speed_us = 490
"#;

    let config: ActuatorConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when the cruise delay is longer than the start delay.
#[test]
fn test_inverted_speed_range() {
    let toml_str = r#"
[ramp]
start_speed_us = 400
end_speed_us = 600
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSpeedRange {
            start_us: 400,
            end_us: 600
        }))
    ));
}

/// Test validation fails for a zero burst cap.
#[test]
fn test_zero_burst_cap() {
    let result = parse_config("burst_cap = 0");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidBurstCap(0)))
    ));
}

/// Test validation fails for a zero ramp adjust interval.
#[test]
fn test_zero_adjust_interval() {
    let result = parse_config("[ramp]\nadjust_interval = 0\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAdjustInterval(0)))
    ));
}

/// Test validation fails for a negative travel limit.
#[test]
fn test_negative_limit() {
    let result = parse_config("[travel]\nlimit_steps = -5\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::NegativeLimit(-5)))
    ));
}

/// Test that a zero travel limit is allowed (motor never moves).
#[test]
fn test_zero_limit_is_valid() {
    assert!(parse_config("[travel]\nlimit_steps = 0\n").is_ok());
}
