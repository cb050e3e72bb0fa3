//! Per-frame command orchestration.
//!
//! [`step`] is the whole control law as a pure function of configuration,
//! previous state and frame input. [`CarController`] owns one state instance
//! and adds logging and sink dispatch around it.
//!
//! # Steering state machine
//!
//! ```text
//!              permitted && torque != 0
//!   Disengaged ───────────────────────────▶ Engaged
//!       ▲                                      │
//!       │  !enabled ─────────▶ NotEnabled      │
//!       │  standstill ───────▶ Standstill      │
//!       └──torque == 0 ──────▶ ZeroCrossingReset
//! ```
//!
//! A zero-crossing reset lasts exactly one frame: the next steering frame is
//! evaluated from scratch.

use lka_cadence::{is_due, sequence_index};
use lka_errors::Result;
use lka_torque_limits::limit_torque;
use tracing::{debug, error, info, trace};

use crate::command::{CommandPayload, CommandRecord, FrameCommands, StreamId};
use crate::config::ControllerConfig;
use crate::hud::map_alert;
use crate::input::{FrameInput, desired_torque};
use crate::params::CarFingerprint;
use crate::sink::CommandSink;

/// Why torque is not being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisengageReason {
    /// Lane keeping not requested
    NotEnabled,
    /// Vehicle stationary
    Standstill,
    /// Limited command landed on zero; the enabled flag drops for one frame
    /// so the rack's intervention timer restarts
    ZeroCrossingReset,
}

/// Actuation state of the steering stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteeringState {
    /// Torque applied with the enabled flag set
    Engaged,
    /// Torque forced to zero or enabled flag dropped
    Disengaged(DisengageReason),
}

impl SteeringState {
    /// Whether the last steering record carried torque.
    pub fn is_engaged(self) -> bool {
        matches!(self, SteeringState::Engaged)
    }
}

impl Default for SteeringState {
    fn default() -> Self {
        SteeringState::Disengaged(DisengageReason::NotEnabled)
    }
}

/// State carried from one frame to the next.
///
/// Owned by exactly one controller. `last_applied` is only written on frames
/// where the steering stream is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControllerState {
    frame: u64,
    last_applied: i32,
    steering: SteeringState,
}

impl ControllerState {
    /// Fresh session state: frame 0, no torque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state whose next frame is `frame`.
    pub fn starting_at(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Frame the next call will process.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Last steering torque sent.
    pub fn last_applied(&self) -> i32 {
        self.last_applied
    }

    /// Steering state after the last steering frame.
    pub fn steering(&self) -> SteeringState {
        self.steering
    }
}

/// Process one frame.
///
/// Emits, in order, a steering, HUD and buttons record for each stream due on
/// `state.frame()`, and returns the state for the next frame. Total: there is
/// no error path.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
pub fn step(
    config: &ControllerConfig,
    state: ControllerState,
    input: &FrameInput,
) -> (ControllerState, FrameCommands) {
    let frame = state.frame;
    let mut next = state;
    let mut commands = FrameCommands::new();

    if is_due(frame, config.steering_active) {
        let (torque, steering) = steer(config, state.last_applied, input);
        next.last_applied = torque;
        next.steering = steering;

        commands.push(CommandRecord::new(
            sequence_index(frame, config.steering_active),
            CommandPayload::Steering {
                torque,
                enabled: steering.is_engaged(),
            },
        ));
    }

    if is_due(frame, config.hud) {
        commands.push(CommandRecord::new(
            sequence_index(frame, config.hud),
            CommandPayload::Hud {
                enabled: input.steering_permitted(),
                alert: map_alert(input.visual_alert, input.audible_alert),
                left_lane: input.left_lane_visible,
                right_lane: input.right_lane_visible,
            },
        ));
    }

    if is_due(frame, config.buttons) {
        commands.push(CommandRecord::new(
            sequence_index(frame, config.buttons),
            CommandPayload::Buttons {
                code: input.buttons,
            },
        ));
    }

    next.frame = frame.wrapping_add(1);
    (next, commands)
}

fn steer(
    config: &ControllerConfig,
    last_applied: i32,
    input: &FrameInput,
) -> (i32, SteeringState) {
    if !input.enabled {
        return (0, SteeringState::Disengaged(DisengageReason::NotEnabled));
    }
    if input.standstill {
        return (0, SteeringState::Disengaged(DisengageReason::Standstill));
    }

    let desired = desired_torque(input.steer_effort, config.limits.max_magnitude());
    let limited = limit_torque(desired, last_applied, input.driver_torque, &config.limits);

    if limited.zero_reset {
        (
            limited.torque,
            SteeringState::Disengaged(DisengageReason::ZeroCrossingReset),
        )
    } else {
        (limited.torque, SteeringState::Engaged)
    }
}

/// Lane keeping command controller for one actuator channel.
///
/// Each physical bus gets its own instance; instances share nothing.
///
/// # Example
///
/// ```
/// use lka_controller::prelude::*;
///
/// let mut controller = CarController::for_fingerprint(CarFingerprint::Golf)?;
///
/// let input = FrameInput {
///     enabled: true,
///     steer_effort: 1.0,
///     ..FrameInput::default()
/// };
///
/// let commands = controller.update(&input);
/// let streams: Vec<StreamId> = commands.streams().collect();
/// assert_eq!(streams, [StreamId::Steering, StreamId::Hud, StreamId::Buttons]);
/// # Ok::<(), lka_errors::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CarController {
    config: ControllerConfig,
    state: ControllerState,
}

impl CarController {
    /// Create a controller from a configuration.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ControllerConfig::validate`]. Invalid
    /// configuration is only ever reported here, never per frame.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate().inspect_err(|e| {
            error!(
                fingerprint = %config.fingerprint,
                severity = %e.severity(),
                actuation_allowed = e.severity().allows_actuation(),
                error = %e,
                "controller configuration rejected"
            );
        })?;

        info!(
            fingerprint = %config.fingerprint,
            dbc = config.fingerprint.dbc_name(),
            steering_hz = config.rate_hz(StreamId::Steering),
            hud_hz = config.rate_hz(StreamId::Hud),
            buttons_hz = config.rate_hz(StreamId::Buttons),
            max_torque = config.limits.max_magnitude(),
            "lane keeping controller initialized"
        );

        Ok(Self {
            config,
            state: ControllerState::new(),
        })
    }

    /// Create a controller for a vehicle fingerprint.
    ///
    /// # Errors
    ///
    /// Returns a [`lka_errors::ConfigError`] if the platform table is invalid.
    pub fn for_fingerprint(fingerprint: CarFingerprint) -> Result<Self> {
        Self::new(ControllerConfig::for_fingerprint(fingerprint)?)
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current state, positioned at the next frame.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Process one control frame and advance the frame counter.
    pub fn update(&mut self, input: &FrameInput) -> FrameCommands {
        let before = self.state;
        let (next, commands) = step(&self.config, before, input);

        if next.steering != before.steering {
            log_transition(before.frame, next.steering, next.last_applied);
        }

        self.state = next;
        commands
    }

    /// Process one frame and hand every record to `sink` in order.
    ///
    /// The frame counts as processed even if the sink fails; the state has
    /// already advanced and the next call processes the following frame.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink. Records after the
    /// failing one are not sent.
    pub fn dispatch<S: CommandSink>(
        &mut self,
        input: &FrameInput,
        sink: &mut S,
    ) -> std::result::Result<FrameCommands, S::Error> {
        let commands = self.update(input);
        for record in &commands {
            sink.send(self.config.buses.bus_for(record.stream), record)?;
        }
        Ok(commands)
    }

    /// Return to the initial session state: frame 0, no torque.
    pub fn reset(&mut self) {
        debug!(frame = self.state.frame, "controller state reset");
        self.state = ControllerState::new();
    }
}

fn log_transition(frame: u64, steering: SteeringState, torque: i32) {
    match steering {
        SteeringState::Engaged => debug!(frame, torque, "steering engaged"),
        SteeringState::Disengaged(DisengageReason::ZeroCrossingReset) => {
            trace!(frame, "zero-crossing reset, HCA disabled for one frame");
        }
        SteeringState::Disengaged(reason) => {
            debug!(frame, ?reason, "steering disengaged");
        }
    }
}
