//! Vehicle parameter tables.
//!
//! **WARNING**
//!
//! The values listed here bound what the steering rack is asked to do. A
//! larger torque or a faster ramp than the rack accepts raises a fault that
//! disables the assist for the rest of the drive. Do not change them
//! without validating against the vehicle.

use std::fmt;
use std::str::FromStr;

use lka_errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::command::StreamId;

/// Supported vehicle fingerprints.
///
/// Resolved once from the fingerprint key at startup; the controller never
/// re-dispatches on the vehicle per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarFingerprint {
    /// Volkswagen Golf Mk7, MQB platform
    #[serde(rename = "VOLKSWAGEN GOLF")]
    Golf,
}

impl CarFingerprint {
    /// All supported fingerprints.
    pub const ALL: [CarFingerprint; 1] = [CarFingerprint::Golf];

    /// Fingerprint key as reported by the car interface.
    pub fn key(self) -> &'static str {
        match self {
            CarFingerprint::Golf => "VOLKSWAGEN GOLF",
        }
    }

    /// Powertrain bus DBC the external encoder packs records with.
    pub fn dbc_name(self) -> &'static str {
        match self {
            CarFingerprint::Golf => "vw_mqb_2010",
        }
    }

    /// Parameter table for this vehicle.
    pub fn params(self) -> CarParams {
        match self {
            CarFingerprint::Golf => CarParams::MQB,
        }
    }
}

impl fmt::Display for CarFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CarFingerprint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarFingerprint::ALL
            .into_iter()
            .find(|fp| fp.key() == s.trim())
            .ok_or_else(|| ConfigError::unknown_fingerprint(s))
    }
}

/// Raw controller parameters for one platform.
///
/// Periods are in frames of the 100 Hz control loop; torques in 0.01 Nm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarParams {
    /// HCA_01 period while applying torque (100 Hz)
    pub hca_step_active: u32,
    /// HCA_01 period while idle (10 Hz)
    pub hca_step_inactive: u32,
    /// LDW_02 period (10 Hz)
    pub ldw_step: u32,
    /// GRA_ACC_01 period (33 Hz)
    pub gra_acc_step: u32,

    /// Max heading control assist torque, 3.00 Nm
    pub steer_max: u16,
    /// Max HCA reached in 0.375 s (STEER_MAX / (100 Hz * 0.375))
    pub steer_delta_up: u16,
    /// Min HCA reached in 0.375 s
    pub steer_delta_down: u16,
    /// Driver torque tolerated before the ceiling starts to drop
    pub steer_driver_allowance: u16,
    /// Weight driver torque heavily
    pub steer_driver_multiplier: u16,
    /// From the DBC
    pub steer_driver_factor: u16,
}

impl CarParams {
    /// Volkswagen MQB.
    pub const MQB: CarParams = CarParams {
        hca_step_active: 1,
        hca_step_inactive: 10,
        ldw_step: 10,
        gra_acc_step: 3,
        steer_max: 300,
        steer_delta_up: 8,
        steer_delta_down: 8,
        steer_driver_allowance: 100,
        steer_driver_multiplier: 4,
        steer_driver_factor: 1,
    };
}

/// Bus numbers each stream is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusLayout {
    /// J533 gateway side: steering and HUD
    pub gateway: u8,
    /// Extended bus: cruise buttons
    pub extended: u8,
}

impl BusLayout {
    /// Bus a stream's records are sent on.
    pub fn bus_for(&self, stream: StreamId) -> u8 {
        match stream {
            StreamId::Steering | StreamId::Hud => self.gateway,
            StreamId::Buttons => self.extended,
        }
    }
}

impl Default for BusLayout {
    fn default() -> Self {
        Self {
            gateway: 0,
            extended: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_from_key() -> Result<(), ConfigError> {
        let fp: CarFingerprint = "VOLKSWAGEN GOLF".parse()?;
        assert_eq!(fp, CarFingerprint::Golf);
        assert_eq!(fp.to_string(), "VOLKSWAGEN GOLF");
        Ok(())
    }

    #[test]
    fn test_unknown_fingerprint_rejected() {
        let result = "HONDA CIVIC".parse::<CarFingerprint>();
        assert!(matches!(result, Err(ConfigError::UnknownFingerprint(ref k)) if k == "HONDA CIVIC"));
    }

    #[test]
    fn test_golf_uses_mqb_table() {
        let params = CarFingerprint::Golf.params();
        assert_eq!(params, CarParams::MQB);
        assert_eq!(params.steer_max, 300);
        assert_eq!(CarFingerprint::Golf.dbc_name(), "vw_mqb_2010");
    }

    #[test]
    fn test_bus_routing() {
        let buses = BusLayout {
            gateway: 2,
            extended: 5,
        };
        assert_eq!(buses.bus_for(StreamId::Steering), 2);
        assert_eq!(buses.bus_for(StreamId::Hud), 2);
        assert_eq!(buses.bus_for(StreamId::Buttons), 5);
    }
}
