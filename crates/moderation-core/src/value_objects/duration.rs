//! Timed ban duration
//!
//! Durations arrive as arbitrary JSON numbers (`60`, `1.5`, `-3`). The exact
//! number is kept so acknowledgements can echo it back unchanged as
//! `expires_in`.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Default timed ban length in seconds
pub const DEFAULT_TIMED_BAN_SECS: u64 = 60;

/// Number of seconds a timed ban lasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BanDuration(serde_json::Number);

impl BanDuration {
    /// Create a duration from whole seconds
    pub fn from_secs(secs: u64) -> Self {
        Self(serde_json::Number::from(secs))
    }

    /// Create a duration from fractional seconds
    ///
    /// Returns `None` for NaN or infinite values.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        serde_json::Number::from_f64(secs).map(Self)
    }

    /// The duration in (possibly fractional) seconds
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    /// The number exactly as supplied by the caller
    pub fn as_number(&self) -> &serde_json::Number {
        &self.0
    }

    /// Convert to a signed time delta with microsecond precision
    ///
    /// Non-positive durations are valid; they produce a ban that is already
    /// expired.
    pub fn to_time_delta(&self) -> Result<TimeDelta, DomainError> {
        let micros = (self.as_secs_f64() * 1_000_000.0).round();
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
            return Err(DomainError::InvalidDuration(self.0.to_string()));
        }
        Ok(TimeDelta::microseconds(micros as i64))
    }
}

impl Default for BanDuration {
    fn default() -> Self {
        Self::from_secs(DEFAULT_TIMED_BAN_SECS)
    }
}

impl fmt::Display for BanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
