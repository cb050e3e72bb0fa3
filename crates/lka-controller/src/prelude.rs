//! Common imports for driving a controller.

pub use crate::command::{ButtonCode, CommandPayload, CommandRecord, FrameCommands, StreamId};
pub use crate::config::ControllerConfig;
pub use crate::controller::{CarController, ControllerState, DisengageReason, SteeringState, step};
pub use crate::hud::{AudibleAlert, HudAlert, VisualAlert};
pub use crate::input::FrameInput;
pub use crate::params::{BusLayout, CarFingerprint};
pub use crate::sink::{CommandSink, RecordingSink};
