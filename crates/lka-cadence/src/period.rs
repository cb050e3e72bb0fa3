//! Validated stream periods.

use std::fmt;
use std::num::{NonZeroU32, NonZeroU64};

use lka_errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Number of control frames between two transmissions of one stream.
///
/// Always at least one frame; a zero period is rejected when the value is
/// built, so the per-frame path never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StreamPeriod(NonZeroU32);

impl StreamPeriod {
    /// Transmit on every frame.
    pub const EVERY_FRAME: StreamPeriod = StreamPeriod(NonZeroU32::MIN);

    /// Create a period of `frames` control frames.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPeriod`] if `frames` is zero.
    pub fn new(frames: u32) -> Result<Self> {
        NonZeroU32::new(frames)
            .map(StreamPeriod)
            .ok_or_else(|| ConfigError::invalid_period("stream", frames))
    }

    /// Create a period, naming the stream in the error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPeriod`] if `frames` is zero.
    pub fn for_stream(stream: &str, frames: u32) -> Result<Self> {
        NonZeroU32::new(frames)
            .map(StreamPeriod)
            .ok_or_else(|| ConfigError::invalid_period(stream, frames))
    }

    /// Period in frames.
    #[inline]
    pub fn frames(self) -> u32 {
        self.0.get()
    }

    #[inline]
    pub(crate) fn as_nonzero_u64(self) -> NonZeroU64 {
        NonZeroU64::from(self.0)
    }

    /// Effective transmit rate for a loop running at `loop_hz`.
    pub fn rate_hz(self, loop_hz: u32) -> f64 {
        f64::from(loop_hz) / f64::from(self.frames())
    }
}

impl Default for StreamPeriod {
    fn default() -> Self {
        Self::EVERY_FRAME
    }
}

impl TryFrom<u32> for StreamPeriod {
    type Error = ConfigError;

    fn try_from(frames: u32) -> Result<Self> {
        Self::new(frames)
    }
}

impl From<StreamPeriod> for u32 {
    fn from(period: StreamPeriod) -> Self {
        period.frames()
    }
}

impl fmt::Display for StreamPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frame(s)", self.frames())
    }
}
