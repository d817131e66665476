//! Unit types for physical quantities.
//!
//! Keeps step counts, half-pulse delays and travel percentages apart at
//! compile time.

use core::ops::Add;

use serde::Deserialize;

/// Motor position in steps (absolute from the homed origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Half-pulse delay in microseconds.
///
/// Larger is slower: one step takes twice this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

/// Target position as a percentage of the travel range.
///
/// Deliberately unclamped: values outside `0..=100` extrapolate past the
/// travel range and are stopped by the travel guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(pub i32);

impl Percent {
    /// Fully closed (the homed end).
    pub const CLOSED: Self = Self(0);
    /// Fully open (the limit end).
    pub const OPEN: Self = Self(100);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Absolute step position this percentage maps to for a given limit.
    ///
    /// Multiplies before dividing so the result stays within one step of
    /// `percent / 100 * limit` for any limit.
    #[inline]
    pub fn to_steps(self, limit: Steps) -> Steps {
        Steps((self.0 as i64).saturating_mul(limit.0) / 100)
    }
}

impl From<i32> for Percent {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
