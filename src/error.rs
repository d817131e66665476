//! Error types for blinds-motion.
//!
//! Motion itself never fails: hardware calls are infallible and hitting a
//! travel limit is reported through [`BurstResult`](crate::motion::BurstResult).
//! Errors only arise while loading configuration or assembling a motor.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all blinds-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor assembly error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Start speed must be at least the end speed, and both non-zero
    InvalidSpeedRange {
        /// Half-pulse delay at rest (microseconds)
        start_us: u32,
        /// Half-pulse delay at cruise (microseconds)
        end_us: u32,
    },
    /// Burst cap must be > 0
    InvalidBurstCap(u32),
    /// Ramp adjust interval must be > 0
    InvalidAdjustInterval(u32),
    /// Travel limit must be >= 0
    NegativeLimit(i64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor assembly errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// A required pin or delay provider was not supplied to the builder
    MissingComponent(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSpeedRange { start_us, end_us } => write!(
                f,
                "Invalid speed range: start ({} us) must be >= end ({} us) and end must be > 0",
                start_us, end_us
            ),
            ConfigError::InvalidBurstCap(v) => write!(f, "Invalid burst cap: {}. Must be > 0", v),
            ConfigError::InvalidAdjustInterval(v) => {
                write!(f, "Invalid ramp adjust interval: {}. Must be > 0", v)
            }
            ConfigError::NegativeLimit(v) => write!(f, "Invalid travel limit: {}. Must be >= 0", v),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::MissingComponent(what) => write!(f, "{} is required", what),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
