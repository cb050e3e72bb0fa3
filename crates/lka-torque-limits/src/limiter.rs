//! Steering torque rate limiter.
//!
//! Restricts the step-to-step change of the steering command and scales the
//! permitted magnitude down while the driver is fighting the wheel.

use crate::limits::TorqueLimits;

/// Result of one limiter evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitedTorque {
    /// Torque to apply this frame
    pub torque: i32,
    /// The command landed on exactly zero.
    ///
    /// The caller must drop the actuation-enabled flag for this frame. The
    /// rack's intervention timer only resets on a disengage, and a sign
    /// reversal always passes through a zero frame, so every zero crossing
    /// produces this reset.
    pub zero_reset: bool,
}

/// Dynamic magnitude ceiling given the measured driver torque.
///
/// `max_magnitude - max(0, |driver_torque| - threshold) * weight`, clamped to
/// `[0, max_magnitude]`.
///
/// # Example
///
/// ```
/// use lka_torque_limits::{TorqueLimits, driver_ceiling};
///
/// let limits = TorqueLimits::new(300, 8, 8, 100, 4)?;
/// assert_eq!(driver_ceiling(0, &limits), 300);
/// assert_eq!(driver_ceiling(-150, &limits), 100);
/// assert_eq!(driver_ceiling(500, &limits), 0);
/// # Ok::<(), lka_errors::ConfigError>(())
/// ```
#[inline]
pub fn driver_ceiling(driver_torque: i32, limits: &TorqueLimits) -> i32 {
    let max = i64::from(limits.max_magnitude());
    let excess = i64::from(driver_torque)
        .abs()
        .saturating_sub(i64::from(limits.driver_override_threshold()))
        .max(0);
    let reduction = excess.saturating_mul(i64::from(limits.driver_override_weight()));
    let ceiling = max.saturating_sub(reduction).clamp(0, max);

    // ceiling is within [0, u16::MAX]
    i32::try_from(ceiling).unwrap_or(0)
}

/// Rate limit a steering torque request.
///
/// 1. Clamp `desired` to `±driver_ceiling`.
/// 2. A request of the opposite sign to a nonzero `previous` targets zero for
///    this frame, so a reversal shrinks to zero before growing the other way.
/// 3. Bound the step by `max_increase_per_frame` while the magnitude grows
///    and by `max_decrease_per_frame` while it shrinks.
///
/// The result never exceeds `max_magnitude`, even for an out-of-range
/// `previous`.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[inline]
pub fn limit_torque(
    desired: i32,
    previous: i32,
    driver_torque: i32,
    limits: &TorqueLimits,
) -> LimitedTorque {
    let ceiling = driver_ceiling(driver_torque, limits);
    let clamped = desired.clamp(-ceiling, ceiling);

    let target = if reverses_sign(previous, clamped) {
        0
    } else {
        clamped
    };

    let max_step = if target.unsigned_abs() > previous.unsigned_abs() {
        i32::from(limits.max_increase_per_frame())
    } else {
        i32::from(limits.max_decrease_per_frame())
    };

    let step = target.saturating_sub(previous).clamp(-max_step, max_step);
    let max = i32::from(limits.max_magnitude());
    let torque = previous.saturating_add(step).clamp(-max, max);

    LimitedTorque {
        torque,
        zero_reset: torque == 0,
    }
}

#[inline]
fn reverses_sign(previous: i32, target: i32) -> bool {
    (previous > 0 && target < 0) || (previous < 0 && target > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lka_errors::Result;

    fn mqb_limits() -> Result<TorqueLimits> {
        TorqueLimits::new(300, 8, 8, 100, 4)
    }

    #[test]
    fn test_step_response_ramps_by_increase_limit() -> Result<()> {
        let limits = mqb_limits()?;
        let mut previous = 0;
        for expected in [8, 16, 24, 32] {
            let out = limit_torque(300, previous, 0, &limits);
            assert_eq!(out.torque, expected);
            assert!(!out.zero_reset);
            previous = out.torque;
        }
        Ok(())
    }

    #[test]
    fn test_ramp_caps_at_max_magnitude() -> Result<()> {
        let limits = mqb_limits()?;
        let mut previous = 0;
        for _ in 0..100 {
            previous = limit_torque(1_000, previous, 0, &limits).torque;
            assert!(previous <= 300);
        }
        assert_eq!(previous, 300);
        Ok(())
    }

    #[test]
    fn test_negative_ramp_is_symmetric() -> Result<()> {
        let limits = mqb_limits()?;
        let pos = limit_torque(300, 0, 0, &limits);
        let neg = limit_torque(-300, 0, 0, &limits);
        assert_eq!(pos.torque, -neg.torque);
        Ok(())
    }

    #[test]
    fn test_decrease_uses_decrease_limit() -> Result<()> {
        let limits = TorqueLimits::new(300, 8, 3, 100, 4)?;
        let out = limit_torque(0, 100, 0, &limits);
        assert_eq!(out.torque, 97);
        Ok(())
    }

    #[test]
    fn test_small_request_is_reached_exactly() -> Result<()> {
        let limits = mqb_limits()?;
        let out = limit_torque(5, 0, 0, &limits);
        assert_eq!(out.torque, 5);
        Ok(())
    }

    #[test]
    fn test_sign_reversal_stops_at_zero() -> Result<()> {
        let limits = mqb_limits()?;
        let out = limit_torque(-300, 4, 0, &limits);
        assert_eq!(out.torque, 0);
        assert!(out.zero_reset);

        let next = limit_torque(-300, out.torque, 0, &limits);
        assert_eq!(next.torque, -8);
        assert!(!next.zero_reset);
        Ok(())
    }

    #[test]
    fn test_sign_reversal_shrinks_by_decrease_limit() -> Result<()> {
        let limits = mqb_limits()?;
        let out = limit_torque(-300, 50, 0, &limits);
        assert_eq!(out.torque, 42);
        Ok(())
    }

    #[test]
    fn test_driver_ceiling_below_threshold_is_full() -> Result<()> {
        let limits = mqb_limits()?;
        assert_eq!(driver_ceiling(100, &limits), 300);
        assert_eq!(driver_ceiling(-100, &limits), 300);
        Ok(())
    }

    #[test]
    fn test_driver_ceiling_shrinks_above_threshold() -> Result<()> {
        let limits = mqb_limits()?;
        assert_eq!(driver_ceiling(120, &limits), 220);
        assert_eq!(driver_ceiling(-120, &limits), 220);
        Ok(())
    }

    #[test]
    fn test_driver_ceiling_saturates_at_zero() -> Result<()> {
        let limits = mqb_limits()?;
        assert_eq!(driver_ceiling(i32::MIN, &limits), 0);
        assert_eq!(driver_ceiling(i32::MAX, &limits), 0);
        Ok(())
    }

    #[test]
    fn test_driver_override_pulls_command_down() -> Result<()> {
        let limits = mqb_limits()?;
        // Ceiling 100, previous 300: shrink by the decrease limit only
        let out = limit_torque(300, 300, 150, &limits);
        assert_eq!(out.torque, 292);
        Ok(())
    }

    #[test]
    fn test_zero_request_from_zero_resets() -> Result<()> {
        let limits = mqb_limits()?;
        let out = limit_torque(0, 0, 0, &limits);
        assert_eq!(out, LimitedTorque { torque: 0, zero_reset: true });
        Ok(())
    }

    #[test]
    fn test_out_of_range_previous_is_bounded() -> Result<()> {
        let limits = mqb_limits()?;
        let out = limit_torque(1_000, 5_000, 0, &limits);
        assert_eq!(out.torque, 300);
        Ok(())
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() -> Result<()> {
        let limits = TorqueLimits::new(u16::MAX, u16::MAX, u16::MAX, 0, u16::MAX)?;
        let out = limit_torque(i32::MAX, i32::MIN, 0, &limits);
        assert!(out.torque.unsigned_abs() <= u32::from(u16::MAX));
        Ok(())
    }
}
