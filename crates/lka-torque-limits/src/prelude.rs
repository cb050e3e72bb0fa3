//! Prelude for the torque limits crate.

pub use crate::limiter::{LimitedTorque, driver_ceiling, limit_torque};
pub use crate::limits::TorqueLimits;
