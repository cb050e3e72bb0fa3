//! Error severity levels.

use core::fmt;

/// Severity used to decide how loudly a fault is escalated.
///
/// Ordered from least to most severe, so `ErrorSeverity::Info <
/// ErrorSeverity::Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Informational, no action needed
    Info,
    /// Degraded but operational
    Warning,
    /// Operation rejected
    Error,
    /// Actuation must not start
    Critical,
}

impl ErrorSeverity {
    /// Whether a controller may still be started after this fault.
    pub fn allows_actuation(self) -> bool {
        self < ErrorSeverity::Error
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
