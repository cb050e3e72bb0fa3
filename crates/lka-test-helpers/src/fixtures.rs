//! Frame input fixtures and a scenario runner.

use lka_controller::{
    AudibleAlert, ButtonCode, CarController, CarFingerprint, CommandRecord, ControllerConfig,
    FrameCommands, FrameInput, StreamId, VisualAlert,
};

use crate::must::must;

/// Builder for [`FrameInput`].
///
/// Starts from an idle frame: disabled, moving, no effort, no alerts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInputBuilder {
    input: FrameInput,
}

impl FrameInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enabled, moving, requesting `effort`.
    pub fn engaged(effort: f32) -> Self {
        Self::new().enabled(true).effort(effort)
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.input.enabled = enabled;
        self
    }

    pub fn standstill(mut self, standstill: bool) -> Self {
        self.input.standstill = standstill;
        self
    }

    pub fn effort(mut self, effort: f32) -> Self {
        self.input.steer_effort = effort;
        self
    }

    pub fn driver_torque(mut self, torque: i32) -> Self {
        self.input.driver_torque = torque;
        self
    }

    pub fn alerts(mut self, visual: VisualAlert, audible: AudibleAlert) -> Self {
        self.input.visual_alert = visual;
        self.input.audible_alert = audible;
        self
    }

    pub fn lanes(mut self, left: bool, right: bool) -> Self {
        self.input.left_lane_visible = left;
        self.input.right_lane_visible = right;
        self
    }

    pub fn buttons(mut self, code: u32) -> Self {
        self.input.buttons = ButtonCode(code);
        self
    }

    pub fn build(self) -> FrameInput {
        self.input
    }
}

impl From<FrameInputBuilder> for FrameInput {
    fn from(builder: FrameInputBuilder) -> Self {
        builder.build()
    }
}

/// Fresh controller for the MQB Golf.
///
/// # Panics
///
/// Panics if the built-in platform table fails validation.
#[track_caller]
pub fn mqb_controller() -> CarController {
    must(CarController::for_fingerprint(CarFingerprint::Golf))
}

/// MQB controller with the slew steps replaced by `up` and `down`.
///
/// # Panics
///
/// Panics if the resulting configuration is rejected.
#[track_caller]
pub fn mqb_controller_with_slew(up: u16, down: u16) -> CarController {
    let json = format!(
        r#"{{
            "fingerprint": "VOLKSWAGEN GOLF",
            "steering_active": 1,
            "steering_inactive": 10,
            "hud": 10,
            "buttons": 3,
            "limits": {{
                "max_magnitude": 300,
                "max_increase_per_frame": {up},
                "max_decrease_per_frame": {down},
                "driver_override_threshold": 100,
                "driver_override_weight": 4
            }}
        }}"#
    );
    let config = must(ControllerConfig::from_json_str(&json));
    must(CarController::new(config))
}

/// Feed `inputs` to `controller` in order, collecting every frame's records.
pub fn run_frames<I>(controller: &mut CarController, inputs: I) -> Vec<FrameCommands>
where
    I: IntoIterator,
    I::Item: Into<FrameInput>,
{
    inputs
        .into_iter()
        .map(|input| controller.update(&input.into()))
        .collect()
}

/// Run the same input for `frames` frames.
pub fn run_constant(
    controller: &mut CarController,
    input: impl Into<FrameInput>,
    frames: usize,
) -> Vec<FrameCommands> {
    let input = input.into();
    run_frames(controller, std::iter::repeat_n(input, frames))
}

/// `(torque, enabled)` of every steering record, in order.
pub fn steering_trace(frames: &[FrameCommands]) -> Vec<(i32, bool)> {
    frames
        .iter()
        .filter_map(|f| f.get(StreamId::Steering))
        .filter_map(CommandRecord::steering)
        .collect()
}

/// Torques of every steering record, in order.
pub fn torque_trace(frames: &[FrameCommands]) -> Vec<i32> {
    steering_trace(frames).into_iter().map(|(t, _)| t).collect()
}

/// Sequence indices of one stream's records, in order.
pub fn sequence_trace(frames: &[FrameCommands], stream: StreamId) -> Vec<u8> {
    frames
        .iter()
        .filter_map(|f| f.get(stream))
        .map(|r| r.sequence)
        .collect()
}
