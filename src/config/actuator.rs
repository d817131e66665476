//! Actuator configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::ramp::RampConfig;
use super::travel::TravelConfig;

/// Default number of steps one `service()` call may execute.
pub const DEFAULT_BURST_CAP: u32 = 1500;

/// Complete actuator configuration from TOML.
///
/// Every field is optional; missing ones take the reference firmware values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActuatorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Upper bound on steps per `service()` call.
    pub burst_cap: u32,

    /// Driver enable input is active-low (A4988, DRV8825, TMC2208).
    pub enable_active_low: bool,

    /// Travel range and direction mapping.
    pub travel: TravelConfig,

    /// Velocity ramp parameters.
    pub ramp: RampConfig,

    /// Manual operation parameters.
    pub operator: OperatorConfig,
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            name: String::try_from("blinds").unwrap_or_default(),
            burst_cap: DEFAULT_BURST_CAP,
            enable_active_low: true,
            travel: TravelConfig::default(),
            ramp: RampConfig::default(),
            operator: OperatorConfig::default(),
        }
    }
}

/// Jog and power-on self test parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    /// Steps per jog command.
    pub jog_steps: u32,

    /// Steps travelled each way during the self test.
    pub self_test_steps: u32,

    /// Pause around the self test direction change (milliseconds).
    pub self_test_pause_ms: u32,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            jog_steps: 200,
            self_test_steps: 200,
            self_test_pause_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_firmware() {
        let config = ActuatorConfig::default();
        assert_eq!(config.name.as_str(), "blinds");
        assert_eq!(config.burst_cap, 1500);
        assert_eq!(config.travel.limit_steps.0, 24000);
        assert_eq!(config.ramp.decel_window_steps, 600);
        assert_eq!(config.ramp.adjust_interval, 3);
        assert_eq!(config.operator.jog_steps, 200);
        assert!(config.enable_active_low);
    }
}
