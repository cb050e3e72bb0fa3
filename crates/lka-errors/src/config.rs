//! Configuration error types.
//!
//! Raised once at construction time: invalid stream periods, out-of-range
//! actuator limits, unknown vehicle fingerprints and malformed config files.

use core::fmt;

use crate::severity::ErrorSeverity;

/// Configuration fault detected while building a controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A stream period must be at least one frame
    #[error("Stream '{stream}' has invalid period {value} (must be >= 1 frame)")]
    InvalidPeriod {
        /// Stream name
        stream: String,
        /// The rejected period
        value: u32,
    },

    /// Numeric field outside its permitted range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Fingerprint key does not name a supported vehicle
    #[error("Unknown vehicle fingerprint '{0}'")]
    UnknownFingerprint(String),

    /// Config document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Cross-field constraint violated
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl ConfigError {
    /// Get the error severity.
    ///
    /// Limit faults are critical: a controller with bad limits must never
    /// command torque.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::OutOfRange { .. } | ConfigError::Constraint(_) => {
                ErrorSeverity::Critical
            }
            ConfigError::InvalidPeriod { .. }
            | ConfigError::UnknownFingerprint(_)
            | ConfigError::Parse(_) => ErrorSeverity::Error,
        }
    }

    /// Create an invalid period error.
    pub fn invalid_period(stream: impl Into<String>, value: u32) -> Self {
        ConfigError::InvalidPeriod {
            stream: stream.into(),
            value,
        }
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ConfigError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create an unknown fingerprint error.
    pub fn unknown_fingerprint(key: impl Into<String>) -> Self {
        ConfigError::UnknownFingerprint(key.into())
    }

    /// Create a parse error from any displayable source.
    pub fn parse(source: impl fmt::Display) -> Self {
        ConfigError::Parse(source.to_string())
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ConfigError::Constraint(msg.into())
    }
}
