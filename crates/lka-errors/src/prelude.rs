//! Prelude module for convenient error handling imports.

pub use crate::{Result, config::ConfigError, severity::ErrorSeverity};
