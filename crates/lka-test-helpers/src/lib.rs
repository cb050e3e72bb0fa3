//! Shared test utilities for the lane keeping controller crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]`
//! - [`assertions`] - Torque bound and slew assertion macros
//! - [`fixtures`] - Frame input builder and scenario runner
//! - [`tracking`] - Allocation tracking for RT safety tests
//! - [`prelude`] - Convenience re-exports
//!
//! ```rust,ignore
//! use lka_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod fixtures;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracking")))]
pub mod tracking;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
