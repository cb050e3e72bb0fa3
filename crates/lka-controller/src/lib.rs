//! Lane keeping command controller for Volkswagen MQB vehicles.
//!
//! Each call to [`CarController::update`] processes one frame of the 100 Hz
//! control loop and returns the command records due on that frame:
//!
//! | Stream | Message | Period | Contents |
//! |--------|---------|--------|----------|
//! | [`StreamId::Steering`] | HCA_01 | 1 | Limited assist torque and enabled flag |
//! | [`StreamId::Hud`] | LDW_02 | 10 | Lane assist state, alert and lane lines |
//! | [`StreamId::Buttons`] | GRA_ACC_01 | 3 | Cruise button passthrough |
//!
//! Records are logical values; packing them into bus frames, checksums and
//! transmission belong to the [`CommandSink`] the host supplies.
//!
//! # RT Safety
//!
//! [`step`] and [`CarController::update`] do not allocate and run in constant
//! time. All configuration errors are reported by [`CarController::new`].

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod command;
pub mod config;
pub mod controller;
pub mod hud;
pub mod input;
pub mod params;
pub mod prelude;
pub mod sink;

pub use command::{
    ButtonCode, CommandPayload, CommandRecord, FrameCommands, MAX_RECORDS_PER_FRAME, StreamId,
};
pub use config::ControllerConfig;
pub use controller::{CarController, ControllerState, DisengageReason, SteeringState, step};
pub use hud::{AudibleAlert, HudAlert, VisualAlert, map_alert};
pub use input::FrameInput;
pub use params::{BusLayout, CarFingerprint, CarParams};
pub use sink::{CommandSink, RecordingSink};
