//! Per-frame controller input.

use crate::command::ButtonCode;
use crate::hud::{AudibleAlert, VisualAlert};

/// Everything the controller reads on one frame.
///
/// Built fresh by the control loop every tick and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Lane keeping requested by the planner
    pub enabled: bool,
    /// Vehicle is stationary
    pub standstill: bool,
    /// Measured driver torque, same units as the steering command
    pub driver_torque: i32,
    /// Desired normalized steering effort, nominally `[-1, 1]`
    pub steer_effort: f32,
    /// Requested visual alert
    pub visual_alert: VisualAlert,
    /// Requested audible alert
    pub audible_alert: AudibleAlert,
    /// Left lane line detected
    pub left_lane_visible: bool,
    /// Right lane line detected
    pub right_lane_visible: bool,
    /// Cruise button state to relay
    pub buttons: ButtonCode,
}

impl FrameInput {
    /// Whether torque may be applied this frame.
    #[inline]
    pub fn steering_permitted(&self) -> bool {
        self.enabled && !self.standstill
    }
}

/// Convert a normalized effort into a raw torque request.
///
/// Efforts outside `[-1, 1]` are clamped and non-finite efforts request
/// zero torque.
#[inline]
pub(crate) fn desired_torque(effort: f32, max_magnitude: u16) -> i32 {
    if !effort.is_finite() {
        return 0;
    }
    let scaled = (effort.clamp(-1.0, 1.0) * f32::from(max_magnitude)).round();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scaled is finite and within +/- u16::MAX"
    )]
    let torque = scaled as i32;
    torque
}
