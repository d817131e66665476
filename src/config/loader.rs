//! Configuration loading from files (std only).

use core::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ActuatorConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use blinds_motion::load_config;
///
/// let config = load_config("blinds.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ActuatorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let mut msg = heapless::String::<128>::new();
        push_truncated(&mut msg, &format!("{}: {}", path.display(), e));
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Syntax and type errors are reported with the line they occur on.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ActuatorConfig> {
    let config: ActuatorConfig =
        toml::from_str(content).map_err(|e| Error::Config(parse_error(content, &e)))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

fn parse_error(content: &str, err: &toml::de::Error) -> ConfigError {
    let mut msg = heapless::String::<128>::new();
    if let Some(span) = err.span() {
        let offset = span.start.min(content.len());
        let line = content.as_bytes()[..offset]
            .iter()
            .filter(|b| **b == b'\n')
            .count()
            + 1;
        let _ = write!(msg, "line {}: ", line);
    }
    push_truncated(&mut msg, err.message());
    ConfigError::ParseError(msg)
}

/// Append as much of `text` as fits.
fn push_truncated<const N: usize>(msg: &mut heapless::String<N>, text: &str) {
    for c in text.chars() {
        if msg.push(c).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ActuatorConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
name = "bedroom"
burst_cap = 1000
enable_active_low = false

[travel]
limit_steps = 18000
invert_direction = true

[ramp]
start_speed_us = 1200
end_speed_us = 490
decel_window_steps = 800
adjust_interval = 2

[operator]
jog_steps = 100
self_test_steps = 50
self_test_pause_ms = 250
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.name.as_str(), "bedroom");
        assert_eq!(config.burst_cap, 1000);
        assert!(!config.enable_active_low);
        assert_eq!(config.travel.limit_steps.0, 18000);
        assert!(config.travel.invert_direction);
        assert_eq!(config.ramp.start_speed_us.0, 1200);
        assert_eq!(config.ramp.end_speed_us.0, 490);
        assert_eq!(config.ramp.decel_window_steps, 800);
        assert_eq!(config.ramp.adjust_interval, 2);
        assert_eq!(config.operator.jog_steps, 100);
        assert_eq!(config.operator.self_test_pause_ms, 250);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let toml = r#"
[ramp]
start_speed_us = 100
end_speed_us = 490
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidSpeedRange { .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("burst_cap = \"lots\"");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_parse_error_names_line() {
        let toml = "name = \"porch\"\nburst_cap = = 3\n";
        match parse_config(toml) {
            Err(Error::Config(ConfigError::ParseError(msg))) => {
                assert!(msg.starts_with("line 2: "), "got {:?}", msg)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_message_is_truncated() {
        let mut msg = heapless::String::<8>::new();
        push_truncated(&mut msg, "travel limit exceeded");
        assert_eq!(msg.as_str(), "travel l");
    }

    #[test]
    fn test_missing_file() {
        match load_config("/nonexistent/blinds.toml") {
            Err(Error::Config(ConfigError::IoError(msg))) => {
                assert!(msg.starts_with("/nonexistent/blinds.toml: "), "got {:?}", msg)
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
