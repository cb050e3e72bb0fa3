//! Prelude module for common cadence types.

pub use crate::cadence::{is_due, next_due, sequence_index};
pub use crate::period::StreamPeriod;
pub use crate::{LOOP_RATE_100HZ, SEQUENCE_MODULUS};
