//! Property-based tests for the cadence crate.

use lka_cadence::prelude::*;
use proptest::prelude::*;

fn period_strategy() -> impl Strategy<Value = StreamPeriod> {
    (1u32..=50).prop_filter_map("nonzero period", |p| StreamPeriod::new(p).ok())
}

proptest! {
    /// Successive due occurrences step the sequence index by exactly one, mod 16.
    #[test]
    fn sequence_advances_once_per_due_occurrence(
        period in period_strategy(),
        start in 0u64..1_000_000,
    ) {
        let first = next_due(start, period);
        let mut expected = sequence_index(first, period);
        let mut frame = first;
        for _ in 0..40 {
            prop_assert!(is_due(frame, period));
            prop_assert_eq!(sequence_index(frame, period), expected);
            expected = (expected + 1) % 16;
            frame += u64::from(period.frames());
        }
    }

    /// Sixteen due occurrences return to the same index.
    #[test]
    fn sequence_repeats_every_sixteen_occurrences(
        period in period_strategy(),
        occurrence in 0u64..100_000,
    ) {
        let p = u64::from(period.frames());
        let frame = occurrence * p;
        prop_assert_eq!(
            sequence_index(frame, period),
            sequence_index(frame + SEQUENCE_MODULUS * p, period)
        );
    }

    /// A stream's index only depends on its own period.
    #[test]
    fn streams_are_independent(
        a in period_strategy(),
        b in period_strategy(),
        frame in 0u64..1_000_000,
    ) {
        let idx_a = sequence_index(frame, a);
        let idx_b = sequence_index(frame, b);
        prop_assert_eq!(u64::from(idx_a), (frame / u64::from(a.frames())) % 16);
        prop_assert_eq!(u64::from(idx_b), (frame / u64::from(b.frames())) % 16);
    }

    /// Exactly one frame in every window of `period` frames is due.
    #[test]
    fn one_due_frame_per_window(
        period in period_strategy(),
        window in 0u64..10_000,
    ) {
        let p = u64::from(period.frames());
        let start = window * p;
        let due = (start..start + p).filter(|f| is_due(*f, period)).count();
        prop_assert_eq!(due, 1);
    }

    /// next_due never moves backwards and always lands on a due frame.
    #[test]
    fn next_due_is_due_and_not_earlier(
        period in period_strategy(),
        frame in 0u64..1_000_000,
    ) {
        let next = next_due(frame, period);
        prop_assert!(next >= frame);
        prop_assert!(next - frame < u64::from(period.frames()));
        prop_assert!(is_due(next, period));
    }
}

#[test]
fn every_frame_stream_returns_to_zero_at_frame_sixteen() {
    let period = StreamPeriod::EVERY_FRAME;
    let indices: Vec<u8> = (0..=16).map(|f| sequence_index(f, period)).collect();

    assert!((0..=16).all(|f| is_due(f, period)));
    assert_eq!(indices.first().copied(), Some(0));
    assert_eq!(indices.get(15).copied(), Some(15));
    assert_eq!(indices.last().copied(), Some(0));
}

#[test]
fn period_rejects_zero_when_deserialized() {
    let ok: Result<StreamPeriod, _> = serde_json::from_str("10");
    assert!(matches!(ok, Ok(p) if p.frames() == 10));

    let zero: Result<StreamPeriod, _> = serde_json::from_str("0");
    assert!(matches!(zero, Err(_)));
}
