//! Destination for outbound records.
//!
//! The controller does not pack bytes or talk to hardware. A sink receives
//! each logical record together with the bus it is routed to and hands it to
//! whatever encoder and transport the host uses.

use std::convert::Infallible;

use crate::command::CommandRecord;

/// Receives command records in emission order.
pub trait CommandSink {
    /// Error reported by the transport.
    type Error;

    /// Send one record on `bus`.
    ///
    /// # Errors
    ///
    /// Implementation defined. [`crate::CarController::dispatch`] stops at the
    /// first error and returns it.
    fn send(&mut self, bus: u8, record: &CommandRecord) -> Result<(), Self::Error>;
}

impl<S: CommandSink + ?Sized> CommandSink for &mut S {
    type Error = S::Error;

    fn send(&mut self, bus: u8, record: &CommandRecord) -> Result<(), Self::Error> {
        (**self).send(bus, record)
    }
}

/// Sink that keeps every record it receives. Used for replay and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    sent: Vec<(u8, CommandRecord)>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far as `(bus, record)` pairs.
    pub fn sent(&self) -> &[(u8, CommandRecord)] {
        &self.sent
    }

    /// Forget everything recorded.
    pub fn clear(&mut self) {
        self.sent.clear();
    }

    /// Take the recorded pairs, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<(u8, CommandRecord)> {
        std::mem::take(&mut self.sent)
    }
}

impl CommandSink for RecordingSink {
    type Error = Infallible;

    fn send(&mut self, bus: u8, record: &CommandRecord) -> Result<(), Self::Error> {
        self.sent.push((bus, *record));
        Ok(())
    }
}
