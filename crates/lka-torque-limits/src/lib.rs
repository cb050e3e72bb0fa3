//! RT-safe steering torque limiting.
//!
//! This crate bounds the steering torque command sent to the power steering
//! rack. Two limits are combined every frame:
//!
//! - **Driver ceiling**: the permitted magnitude shrinks as the measured
//!   driver torque exceeds the override threshold
//! - **Slew**: the per-frame step from the previous command is bounded,
//!   separately for growing and shrinking magnitude
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations
//! - O(1) time complexity
//! - Total over all inputs, out-of-range requests are clamped and never
//!   rejected
//!
//! # Example
//!
//! ```
//! use lka_torque_limits::prelude::*;
//!
//! let limits = TorqueLimits::new(300, 8, 8, 100, 4)?;
//!
//! let first = limit_torque(300, 0, 0, &limits);
//! assert_eq!(first.torque, 8);
//!
//! let second = limit_torque(300, first.torque, 0, &limits);
//! assert_eq!(second.torque, 16);
//! # Ok::<(), lka_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod limiter;
pub mod limits;
pub mod prelude;

pub use limiter::{LimitedTorque, driver_ceiling, limit_torque};
pub use limits::TorqueLimits;
