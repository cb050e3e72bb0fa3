//! Property-based tests for configuration errors.

use lka_errors::{ConfigError, ErrorSeverity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_invalid_period_preserves_stream_name(stream in "[a-z_]{1,16}", value in 0u32..4) {
        let err = ConfigError::invalid_period(stream.clone(), value);
        let msg = err.to_string();
        prop_assert!(msg.contains(&stream));
        prop_assert!(msg.contains(&value.to_string()));
    }

    #[test]
    fn test_out_of_range_is_critical(value in any::<i64>()) {
        let err = ConfigError::out_of_range("driver_override_weight", value, 0, 64);
        prop_assert_eq!(err.severity(), ErrorSeverity::Critical);
        prop_assert!(!err.severity().allows_actuation());
    }

    #[test]
    fn test_error_equality_is_structural(key in ".{0,24}") {
        let a = ConfigError::unknown_fingerprint(key.clone());
        let b = ConfigError::unknown_fingerprint(key);
        prop_assert_eq!(a, b);
    }
}
