//! Error types for the lane keeping actuation layer.
//!
//! The per-frame control path is total and never fails. Every fault this
//! workspace can report is a configuration fault, raised once while a
//! controller is being built and never from inside a control tick.
//!
//! - [`config`]: the [`ConfigError`] taxonomy and its helper constructors
//! - [`severity`]: [`ErrorSeverity`] used for escalation decisions
//!
//! # Example
//!
//! ```
//! use lka_errors::prelude::*;
//!
//! fn check_period(stream: &str, period: u32) -> Result<u32> {
//!     if period == 0 {
//!         return Err(ConfigError::invalid_period(stream, period));
//!     }
//!     Ok(period)
//! }
//!
//! assert!(check_period("hud", 10).is_ok());
//! assert!(check_period("hud", 0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod prelude;
pub mod severity;

pub use config::ConfigError;
pub use severity::ErrorSeverity;

/// A specialized `Result` type for configuration-time operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
