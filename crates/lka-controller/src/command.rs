//! Outbound command records.
//!
//! One record per due stream per frame. Records are plain values: they are
//! handed to the external encoder and dropped, nothing in the controller
//! keeps a reference to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hud::HudAlert;

/// Maximum number of records a single frame can produce.
pub const MAX_RECORDS_PER_FRAME: usize = 3;

/// Outbound command stream.
///
/// Declaration order is the emission order within a frame, highest safety
/// priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamId {
    /// Heading control assist torque
    Steering,
    /// Lane assist HUD
    Hud,
    /// Cruise control buttons
    Buttons,
}

impl StreamId {
    /// All streams in emission order.
    pub const ALL: [StreamId; MAX_RECORDS_PER_FRAME] =
        [StreamId::Steering, StreamId::Hud, StreamId::Buttons];

    /// Short lowercase name used in logs and config errors.
    pub fn name(self) -> &'static str {
        match self {
            StreamId::Steering => "steering",
            StreamId::Hud => "hud",
            StreamId::Buttons => "buttons",
        }
    }

    /// Bus message the encoder packs this stream into.
    pub fn message_name(self) -> &'static str {
        match self {
            StreamId::Steering => "HCA_01",
            StreamId::Hud => "LDW_02",
            StreamId::Buttons => "GRA_ACC_01",
        }
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw cruise control button state relayed unchanged to the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonCode(pub u32);

/// Stream-specific record contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandPayload {
    /// Applied steering torque and the actuation-enabled flag
    Steering {
        /// Limited torque in 0.01 Nm
        torque: i32,
        /// HCA enabled flag
        enabled: bool,
    },
    /// HUD state
    Hud {
        /// Lane assist active
        enabled: bool,
        /// Take-over alert code
        alert: HudAlert,
        /// Left lane line visible
        left_lane: bool,
        /// Right lane line visible
        right_lane: bool,
    },
    /// Button passthrough
    Buttons {
        /// Raw button state
        code: ButtonCode,
    },
}

impl CommandPayload {
    /// Stream this payload belongs to.
    pub fn stream(&self) -> StreamId {
        match self {
            CommandPayload::Steering { .. } => StreamId::Steering,
            CommandPayload::Hud { .. } => StreamId::Hud,
            CommandPayload::Buttons { .. } => StreamId::Buttons,
        }
    }
}

/// A single outbound command for the external encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Stream the record belongs to
    pub stream: StreamId,
    /// Rolling sequence index in `[0, 16)`
    pub sequence: u8,
    /// Stream-specific contents
    pub payload: CommandPayload,
}

impl CommandRecord {
    pub(crate) fn new(sequence: u8, payload: CommandPayload) -> Self {
        Self {
            stream: payload.stream(),
            sequence,
            payload,
        }
    }

    /// Steering torque and enabled flag, if this is a steering record.
    pub fn steering(&self) -> Option<(i32, bool)> {
        match self.payload {
            CommandPayload::Steering { torque, enabled } => Some((torque, enabled)),
            _ => None,
        }
    }
}

/// Ordered records produced by one frame.
///
/// Fixed capacity, no heap allocation. Iteration yields records in stream
/// priority order.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCommands {
    records: [Option<CommandRecord>; MAX_RECORDS_PER_FRAME],
    len: usize,
}

impl FrameCommands {
    /// Empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records beyond capacity are dropped; the controller
    /// emits at most one per stream so this never happens in practice.
    pub(crate) fn push(&mut self, record: CommandRecord) {
        if let Some(slot) = self.records.get_mut(self.len) {
            *slot = Some(record);
            self.len = self.len.saturating_add(1);
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no stream was due this frame.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandRecord> {
        self.records.iter().flatten()
    }

    /// The record for `stream`, if it was due.
    pub fn get(&self, stream: StreamId) -> Option<&CommandRecord> {
        self.iter().find(|r| r.stream == stream)
    }

    /// Streams emitted this frame, in order.
    pub fn streams(&self) -> impl Iterator<Item = StreamId> + '_ {
        self.iter().map(|r| r.stream)
    }
}

impl fmt::Debug for FrameCommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl IntoIterator for FrameCommands {
    type Item = CommandRecord;
    type IntoIter =
        std::iter::Flatten<std::array::IntoIter<Option<CommandRecord>, MAX_RECORDS_PER_FRAME>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter().flatten()
    }
}

impl<'a> IntoIterator for &'a FrameCommands {
    type Item = &'a CommandRecord;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<CommandRecord>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().flatten()
    }
}
