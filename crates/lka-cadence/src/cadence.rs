//! Cadence decisions derived from the global frame counter.

use crate::SEQUENCE_MODULUS;
use crate::period::StreamPeriod;

/// Whether a stream with `period` transmits on `frame`.
///
/// True when `frame` is a multiple of the period. Frame 0 is always due.
#[inline]
pub fn is_due(frame: u64, period: StreamPeriod) -> bool {
    frame.is_multiple_of(period.as_nonzero_u64().get())
}

/// Rolling 4-bit sequence index for a stream on `frame`.
///
/// `(frame / period) % 16`. The index advances by one per due occurrence
/// of the stream, independent of every other stream's period.
#[inline]
pub fn sequence_index(frame: u64, period: StreamPeriod) -> u8 {
    let occurrence = frame / period.as_nonzero_u64();
    // always < 16
    u8::try_from(occurrence % SEQUENCE_MODULUS).unwrap_or(0)
}

/// First frame at or after `frame` on which the stream is due.
///
/// For offline tooling such as log replay and schedule inspection; the
/// controller itself only asks [`is_due`]. Saturates at `u64::MAX` rather
/// than wrapping.
pub fn next_due(frame: u64, period: StreamPeriod) -> u64 {
    let p = period.as_nonzero_u64().get();
    let rem = frame % period.as_nonzero_u64();
    if rem == 0 {
        frame
    } else {
        frame.saturating_add(p.saturating_sub(rem))
    }
}
