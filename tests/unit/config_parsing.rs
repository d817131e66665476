//! Unit tests for TOML configuration parsing.

use std::io::Write;

use blinds_motion::config::{load_config, ActuatorConfig};

/// Test parsing a complete actuator configuration from TOML.
#[test]
fn test_parse_actuator_config() {
    let toml_str = r#"
name = "kitchen"
burst_cap = 800
enable_active_low = false

[travel]
limit_steps = 18000
invert_direction = true

[ramp]
start_speed_us = 700
end_speed_us = 450
decel_window_steps = 400
adjust_interval = 2

[operator]
jog_steps = 100
self_test_steps = 50
self_test_pause_ms = 250
"#;

    let config: ActuatorConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.name.as_str(), "kitchen");
    assert_eq!(config.burst_cap, 800);
    assert!(!config.enable_active_low);
    assert_eq!(config.travel.limit_steps.value(), 18000);
    assert!(config.travel.invert_direction);
    assert_eq!(config.ramp.start_speed_us.0, 700);
    assert_eq!(config.ramp.end_speed_us.0, 450);
    assert_eq!(config.ramp.decel_window_steps, 400);
    assert_eq!(config.ramp.adjust_interval, 2);
    assert_eq!(config.operator.jog_steps, 100);
    assert_eq!(config.operator.self_test_steps, 50);
    assert_eq!(config.operator.self_test_pause_ms, 250);
}

/// Test that omitted sections fall back to defaults.
#[test]
fn test_partial_config_keeps_defaults() {
    let toml_str = r#"
[ramp]
start_speed_us = 900
"#;

    let config: ActuatorConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let defaults = ActuatorConfig::default();

    assert_eq!(config.ramp.start_speed_us.0, 900);
    assert_eq!(config.ramp.end_speed_us, defaults.ramp.end_speed_us);
    assert_eq!(config.travel, defaults.travel);
    assert_eq!(config.operator, defaults.operator);
}

/// Test that a name longer than 32 bytes is rejected.
#[test]
fn test_name_too_long() {
    let toml_str = r#"name = "a very long name for a roller blind motor""#;
    let result: Result<ActuatorConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that a negative step count is not accepted where unsigned is expected.
#[test]
fn test_negative_burst_cap_rejected() {
    let result: Result<ActuatorConfig, _> = toml::from_str("burst_cap = -1");
    assert!(result.is_err());
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("blinds_motion_load_config_test.toml");
    {
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        writeln!(file, "name = \"study\"").expect("Failed to write");
        writeln!(file, "[travel]").expect("Failed to write");
        writeln!(file, "limit_steps = 12000").expect("Failed to write");
    }

    let config = load_config(&path).expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.name.as_str(), "study");
    assert_eq!(config.travel.limit_steps.value(), 12000);
}
