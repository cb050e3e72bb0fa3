//! Stateless transmit cadence for fixed-rate control loops.
//!
//! Every outbound message class runs at its own bus-mandated rate, expressed
//! as a period in control frames. All decisions derive from the single global
//! frame counter, so streams never drift against each other and no
//! per-stream accumulator exists.
//!
//! - **is_due**: whether a stream transmits on a given frame
//! - **sequence_index**: the 4-bit rolling counter receivers use to detect
//!   lost or duplicated messages
//!
//! # RT-Safety Guarantees
//!
//! - No heap allocations
//! - No state, so nothing to lock or reset
//! - O(1) for every operation
//!
//! # Example
//!
//! ```
//! use lka_cadence::{StreamPeriod, is_due, sequence_index};
//!
//! let gra_acc = StreamPeriod::new(3)?;
//!
//! assert!(is_due(0, gra_acc));
//! assert!(!is_due(1, gra_acc));
//! assert_eq!(sequence_index(6, gra_acc), 2);
//! # Ok::<(), lka_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]

pub mod cadence;
pub mod period;
pub mod prelude;

pub use cadence::{is_due, next_due, sequence_index};
pub use period::StreamPeriod;

/// Number of distinct rolling sequence values (4-bit counter).
pub const SEQUENCE_MODULUS: u64 = 16;

/// Nominal control loop rate of the reference platform.
pub const LOOP_RATE_100HZ: u32 = 100;
