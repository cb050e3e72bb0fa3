//! Actuator limit configuration.

use lka_errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Immutable per-session steering actuator limits.
///
/// All values are in raw torque counts of the steering command signal
/// (0.01 Nm per count on the reference platform).
///
/// # Invariants
///
/// - `max_magnitude > 0`
/// - every other field is non-negative (enforced by the unsigned types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTorqueLimits", into = "RawTorqueLimits")]
pub struct TorqueLimits {
    max_magnitude: u16,
    max_increase_per_frame: u16,
    max_decrease_per_frame: u16,
    driver_override_threshold: u16,
    driver_override_weight: u16,
}

impl TorqueLimits {
    /// Create validated limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] if `max_magnitude` is zero.
    pub fn new(
        max_magnitude: u16,
        max_increase_per_frame: u16,
        max_decrease_per_frame: u16,
        driver_override_threshold: u16,
        driver_override_weight: u16,
    ) -> Result<Self> {
        if max_magnitude == 0 {
            return Err(ConfigError::out_of_range(
                "max_magnitude",
                max_magnitude,
                1,
                u16::MAX,
            ));
        }

        Ok(Self {
            max_magnitude,
            max_increase_per_frame,
            max_decrease_per_frame,
            driver_override_threshold,
            driver_override_weight,
        })
    }

    /// Create limits from a split driver scaling.
    ///
    /// Some platforms publish the driver torque signal with a scale factor
    /// separate from the tuning multiplier. The effective override weight is
    /// `multiplier * factor`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] if `max_magnitude` is zero or the
    /// combined weight overflows `u16`.
    pub fn from_driver_scaling(
        max_magnitude: u16,
        max_increase_per_frame: u16,
        max_decrease_per_frame: u16,
        driver_allowance: u16,
        driver_multiplier: u16,
        driver_factor: u16,
    ) -> Result<Self> {
        let weight = driver_multiplier.checked_mul(driver_factor).ok_or_else(|| {
            ConfigError::out_of_range(
                "driver_override_weight",
                u32::from(driver_multiplier).saturating_mul(u32::from(driver_factor)),
                0,
                u32::from(u16::MAX),
            )
        })?;

        Self::new(
            max_magnitude,
            max_increase_per_frame,
            max_decrease_per_frame,
            driver_allowance,
            weight,
        )
    }

    /// Largest permitted command magnitude.
    #[inline]
    pub fn max_magnitude(&self) -> u16 {
        self.max_magnitude
    }

    /// Largest per-frame step while magnitude grows.
    #[inline]
    pub fn max_increase_per_frame(&self) -> u16 {
        self.max_increase_per_frame
    }

    /// Largest per-frame step while magnitude shrinks.
    #[inline]
    pub fn max_decrease_per_frame(&self) -> u16 {
        self.max_decrease_per_frame
    }

    /// Driver torque tolerated before authority is reduced.
    #[inline]
    pub fn driver_override_threshold(&self) -> u16 {
        self.driver_override_threshold
    }

    /// Authority removed per count of driver torque above the threshold.
    #[inline]
    pub fn driver_override_weight(&self) -> u16 {
        self.driver_override_weight
    }

    /// Number of frames a full-scale ramp from zero takes.
    ///
    /// `None` when the increase limit is zero and the command can never grow.
    pub fn frames_to_full_scale(&self) -> Option<u32> {
        let up = u32::from(self.max_increase_per_frame);
        if up == 0 {
            return None;
        }
        Some(u32::from(self.max_magnitude).div_ceil(up))
    }
}

/// Unvalidated serde mirror of [`TorqueLimits`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTorqueLimits {
    max_magnitude: u16,
    max_increase_per_frame: u16,
    max_decrease_per_frame: u16,
    driver_override_threshold: u16,
    driver_override_weight: u16,
}

impl TryFrom<RawTorqueLimits> for TorqueLimits {
    type Error = ConfigError;

    fn try_from(raw: RawTorqueLimits) -> Result<Self> {
        TorqueLimits::new(
            raw.max_magnitude,
            raw.max_increase_per_frame,
            raw.max_decrease_per_frame,
            raw.driver_override_threshold,
            raw.driver_override_weight,
        )
    }
}

impl From<TorqueLimits> for RawTorqueLimits {
    fn from(limits: TorqueLimits) -> Self {
        Self {
            max_magnitude: limits.max_magnitude,
            max_increase_per_frame: limits.max_increase_per_frame,
            max_decrease_per_frame: limits.max_decrease_per_frame,
            driver_override_threshold: limits.driver_override_threshold,
            driver_override_weight: limits.driver_override_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_magnitude() {
        let result = TorqueLimits::new(0, 8, 8, 100, 4);
        assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_zero_slew_is_accepted() -> Result<()> {
        let limits = TorqueLimits::new(300, 0, 0, 0, 0)?;
        assert_eq!(limits.frames_to_full_scale(), None);
        Ok(())
    }

    #[test]
    fn test_driver_scaling_multiplies_weight() -> Result<()> {
        let limits = TorqueLimits::from_driver_scaling(300, 8, 8, 100, 4, 3)?;
        assert_eq!(limits.driver_override_weight(), 12);
        assert_eq!(limits.driver_override_threshold(), 100);
        Ok(())
    }

    #[test]
    fn test_driver_scaling_overflow_is_rejected() {
        let result = TorqueLimits::from_driver_scaling(300, 8, 8, 100, 1_000, 1_000);
        assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_frames_to_full_scale() -> Result<()> {
        let limits = TorqueLimits::new(300, 8, 8, 100, 4)?;
        // 300 / 8 = 37.5, so the 38th frame reaches the cap
        assert_eq!(limits.frames_to_full_scale(), Some(38));
        Ok(())
    }
}
