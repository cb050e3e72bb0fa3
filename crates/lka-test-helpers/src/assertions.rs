//! Assertion macros for steering torque traces.

/// Assert that every torque in a trace is within `±max`.
///
/// ```rust
/// use lka_test_helpers::assert_torque_bounded;
///
/// assert_torque_bounded!([0, 8, -300, 300], 300);
/// ```
#[macro_export]
macro_rules! assert_torque_bounded {
    ($trace:expr, $max:expr $(,)?) => {
        let max = i64::from($max);
        for (i, torque) in ::std::iter::IntoIterator::into_iter($trace).enumerate() {
            let torque = i64::from(torque);
            if torque.abs() > max {
                panic!(
                    "assertion failed: torque out of bounds\n  index: {}\n  torque: {}\n  max: {}",
                    i, torque, max
                );
            }
        }
    };
}

/// Assert that consecutive torques change by at most `up` when the magnitude
/// grows and at most `down` otherwise.
///
/// ```rust
/// use lka_test_helpers::assert_slew_within;
///
/// assert_slew_within!([8, 16, 8, 0, -8], 8, 8);
/// ```
#[macro_export]
macro_rules! assert_slew_within {
    ($trace:expr, $up:expr, $down:expr $(,)?) => {
        let up = i64::from($up);
        let down = i64::from($down);
        let mut prev: Option<i64> = None;
        for (i, torque) in ::std::iter::IntoIterator::into_iter($trace).enumerate() {
            let torque = i64::from(torque);
            if let Some(prev) = prev {
                let step = (torque - prev).abs();
                let bound = if torque.abs() > prev.abs() { up } else { down };
                if step > bound {
                    panic!(
                        "assertion failed: slew limit exceeded\n  index: {}\n  {} -> {} (step {})\n  bound: {}",
                        i, prev, torque, step, bound
                    );
                }
            }
            prev = Some(torque);
        }
    };
}
