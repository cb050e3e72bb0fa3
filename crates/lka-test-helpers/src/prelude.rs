//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use lka_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{
    FrameInputBuilder, mqb_controller, mqb_controller_with_slew, run_constant, run_frames,
    sequence_trace, steering_trace, torque_trace,
};
pub use crate::must::{must, must_some};
pub use crate::{assert_rt_safe, assert_slew_within, assert_torque_bounded};

#[cfg(feature = "tracking")]
pub use crate::tracking::{AllocationGuard, track};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
