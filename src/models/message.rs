use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whether a message was received or sent, as reported by the provider `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Map the raw provider type code. Only `"1"` (inbox) is incoming.
    pub fn from_type_code(code: &str) -> Self {
        if code == "1" { Direction::Incoming } else { Direction::Outgoing }
    }

    /// Label used in the rendered backup
    pub fn label(self) -> &'static str {
        match self {
            Direction::Incoming => "De",
            Direction::Outgoing => "À",
        }
    }
}

/// One validated SMS extracted from a dump block.
///
/// Only built through [`MessageRecord::new`], which rejects empty addresses and
/// timestamps outside chrono's representable range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    epoch_millis: i64,
    timestamp: DateTime<Utc>,
    address: String,
    direction: Direction,
    body: String,
}

impl MessageRecord {
    pub fn new(
        epoch_millis: u64,
        address: impl Into<String>,
        direction: Direction,
        body: impl Into<String>,
    ) -> Option<Self> {
        let address = address.into();
        if address.is_empty() {
            return None;
        }
        let epoch_millis = i64::try_from(epoch_millis).ok()?;
        let timestamp = DateTime::from_timestamp_millis(epoch_millis)?;

        Some(Self { epoch_millis, timestamp, address, direction, body: body.into() })
    }

    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
