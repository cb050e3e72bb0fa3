//! HUD alert mapping.
//!
//! Collapses the visual and audible alert categories requested by the
//! planner into the single alert code the instrument cluster understands.

use serde::{Deserialize, Serialize};

/// Visual alert category requested for the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualAlert {
    /// No visual alert
    #[default]
    None,
    /// Forward collision warning
    Fcw,
    /// Driver must take over steering
    SteerRequired,
    /// Brake pedal pressed while engaged
    BrakePressed,
    /// Gear not in drive
    WrongGear,
    /// Seatbelt unbuckled
    SeatbeltUnbuckled,
    /// Too fast for lane keeping
    SpeedTooHigh,
    /// Lane departure warning
    Ldw,
}

/// Audible alert category requested alongside the visual alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudibleAlert {
    /// Silent
    #[default]
    None,
    /// Engage confirmation
    ChimeEngage,
    /// Disengage confirmation
    ChimeDisengage,
    /// Fault chime
    ChimeError,
    /// Single warning chime
    ChimeWarning1,
    /// Double warning chime
    ChimeWarning2,
    /// Repeating warning chime
    ChimeWarningRepeat,
    /// Attention prompt
    ChimePrompt,
}

/// Audible categories that escalate to the emergency take-over alert.
pub const EMERGENCY_WARNINGS: [AudibleAlert; 1] = [AudibleAlert::ChimeWarningRepeat];

/// Audible categories that produce the chiming take-over alert.
pub const AUDIBLE_WARNINGS: [AudibleAlert; 2] =
    [AudibleAlert::ChimeWarning1, AudibleAlert::ChimeWarning2];

/// Alert code carried in the HUD message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum HudAlert {
    /// No alert
    None = 0,
    /// "Emergency Assist: Please Take Over Steering", repeating chime
    Emergency = 6,
    /// "Lane Assist: Please Take Over Steering", single chime
    Warning = 7,
    /// "Lane Assist: Please Take Over Steering", silent
    Silent = 8,
}

impl HudAlert {
    /// Raw code sent on the bus.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Map the requested alert categories onto a HUD alert code.
///
/// Only a steering take-over request produces an alert. Emergency chimes
/// outrank warning chimes, and any other audible category, recognized or
/// not, falls through to the silent alert.
///
/// # Example
///
/// ```
/// use lka_controller::hud::{AudibleAlert, HudAlert, VisualAlert, map_alert};
///
/// let alert = map_alert(VisualAlert::SteerRequired, AudibleAlert::ChimeWarning1);
/// assert_eq!(alert, HudAlert::Warning);
/// assert_eq!(alert.code(), 7);
/// ```
pub fn map_alert(visual: VisualAlert, audible: AudibleAlert) -> HudAlert {
    if visual != VisualAlert::SteerRequired {
        return HudAlert::None;
    }

    if EMERGENCY_WARNINGS.contains(&audible) {
        HudAlert::Emergency
    } else if AUDIBLE_WARNINGS.contains(&audible) {
        HudAlert::Warning
    } else {
        HudAlert::Silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_AUDIBLE: [AudibleAlert; 8] = [
        AudibleAlert::None,
        AudibleAlert::ChimeEngage,
        AudibleAlert::ChimeDisengage,
        AudibleAlert::ChimeError,
        AudibleAlert::ChimeWarning1,
        AudibleAlert::ChimeWarning2,
        AudibleAlert::ChimeWarningRepeat,
        AudibleAlert::ChimePrompt,
    ];

    #[test]
    fn test_emergency_chime_maps_to_code_6() {
        let alert = map_alert(VisualAlert::SteerRequired, AudibleAlert::ChimeWarningRepeat);
        assert_eq!(alert.code(), 6);
    }

    #[test]
    fn test_warning_chimes_map_to_code_7() {
        for audible in AUDIBLE_WARNINGS {
            assert_eq!(map_alert(VisualAlert::SteerRequired, audible).code(), 7);
        }
    }

    #[test]
    fn test_no_chime_maps_to_silent_code_8() {
        let alert = map_alert(VisualAlert::SteerRequired, AudibleAlert::None);
        assert_eq!(alert, HudAlert::Silent);
        assert_eq!(alert.code(), 8);
    }

    #[test]
    fn test_other_chimes_fall_through_to_silent() {
        for audible in [
            AudibleAlert::ChimeEngage,
            AudibleAlert::ChimeDisengage,
            AudibleAlert::ChimeError,
            AudibleAlert::ChimePrompt,
        ] {
            assert_eq!(map_alert(VisualAlert::SteerRequired, audible), HudAlert::Silent);
        }
    }

    #[test]
    fn test_other_visual_alerts_never_alert() {
        for visual in [
            VisualAlert::None,
            VisualAlert::Fcw,
            VisualAlert::BrakePressed,
            VisualAlert::WrongGear,
            VisualAlert::SeatbeltUnbuckled,
            VisualAlert::SpeedTooHigh,
            VisualAlert::Ldw,
        ] {
            for audible in ALL_AUDIBLE {
                assert_eq!(map_alert(visual, audible).code(), 0);
            }
        }
    }

    #[test]
    fn test_alert_deserializes_from_camel_case() -> Result<(), serde_json::Error> {
        let visual: VisualAlert = serde_json::from_str("\"steerRequired\"")?;
        let audible: AudibleAlert = serde_json::from_str("\"chimeWarningRepeat\"")?;
        assert_eq!(map_alert(visual, audible), HudAlert::Emergency);
        Ok(())
    }
}
