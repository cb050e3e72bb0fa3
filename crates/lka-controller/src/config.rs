//! Controller configuration.
//!
//! Fixed at construction. Everything that can be wrong with a configuration
//! is reported here, once, so the per-frame path can assume valid values.

use lka_cadence::{LOOP_RATE_100HZ, StreamPeriod};
use lka_errors::{ConfigError, Result};
use lka_torque_limits::TorqueLimits;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::command::StreamId;
use crate::params::{BusLayout, CarFingerprint};

/// Complete configuration of one controller instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    /// Vehicle the parameters were resolved for
    pub fingerprint: CarFingerprint,
    /// Steering period used for every frame
    pub steering_active: StreamPeriod,
    /// Idle steering period. Validated and exposed, but the controller
    /// always transmits at `steering_active` and suppresses torque through
    /// the enable state instead.
    pub steering_inactive: StreamPeriod,
    /// HUD period
    pub hud: StreamPeriod,
    /// Button passthrough period
    pub buttons: StreamPeriod,
    /// Steering torque limits
    pub limits: TorqueLimits,
    /// Bus routing per stream
    #[serde(default)]
    pub buses: BusLayout,
    /// Control loop rate, used for reporting stream rates
    #[serde(default = "default_loop_rate_hz")]
    pub loop_rate_hz: u32,
}

fn default_loop_rate_hz() -> u32 {
    LOOP_RATE_100HZ
}

impl ControllerConfig {
    /// Resolve the configuration for a vehicle fingerprint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the platform table holds an invalid
    /// period or limit.
    pub fn for_fingerprint(fingerprint: CarFingerprint) -> Result<Self> {
        let p = fingerprint.params();

        let config = Self {
            fingerprint,
            steering_active: StreamPeriod::for_stream("steering_active", p.hca_step_active)?,
            steering_inactive: StreamPeriod::for_stream(
                "steering_inactive",
                p.hca_step_inactive,
            )?,
            hud: StreamPeriod::for_stream(StreamId::Hud.name(), p.ldw_step)?,
            buttons: StreamPeriod::for_stream(StreamId::Buttons.name(), p.gra_acc_step)?,
            limits: TorqueLimits::from_driver_scaling(
                p.steer_max,
                p.steer_delta_up,
                p.steer_delta_down,
                p.steer_driver_allowance,
                p.steer_driver_multiplier,
                p.steer_driver_factor,
            )?,
            buses: BusLayout::default(),
            loop_rate_hz: LOOP_RATE_100HZ,
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration from a fingerprint key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFingerprint`] for an unsupported key.
    pub fn for_fingerprint_key(key: &str) -> Result<Self> {
        Self::for_fingerprint(key.parse()?)
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown fields,
    /// zero periods or invalid limits, and any error from
    /// [`ControllerConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::parse)
    }

    /// Check cross-field constraints.
    ///
    /// Periods and limits are already valid by construction; this covers
    /// what their types cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for a zero loop rate and
    /// [`ConfigError::Constraint`] if the idle steering period is shorter
    /// than the active one.
    pub fn validate(&self) -> Result<()> {
        if self.loop_rate_hz == 0 {
            return Err(ConfigError::out_of_range(
                "loop_rate_hz",
                self.loop_rate_hz,
                1,
                u32::MAX,
            ));
        }

        if self.steering_inactive < self.steering_active {
            return Err(ConfigError::constraint(format!(
                "steering_inactive ({}) must not be shorter than steering_active ({})",
                self.steering_inactive, self.steering_active
            )));
        }

        if self.limits.max_increase_per_frame() == 0 {
            warn!(
                fingerprint = %self.fingerprint,
                "max_increase_per_frame is 0, steering torque can never be applied"
            );
        }

        trace!(
            fingerprint = %self.fingerprint,
            steering = self.steering_active.frames(),
            hud = self.hud.frames(),
            buttons = self.buttons.frames(),
            "controller config validated"
        );
        Ok(())
    }

    /// Period of a stream.
    pub fn period(&self, stream: StreamId) -> StreamPeriod {
        match stream {
            StreamId::Steering => self.steering_active,
            StreamId::Hud => self.hud,
            StreamId::Buttons => self.buttons,
        }
    }

    /// Effective transmit rate of a stream in Hz.
    pub fn rate_hz(&self, stream: StreamId) -> f64 {
        self.period(stream).rate_hz(self.loop_rate_hz)
    }
}
