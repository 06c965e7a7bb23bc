//! Chat messages.

use crate::model::MessageId;
use serde::{Deserialize, Serialize};

// ===== Side =====

/// Which side of the conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Authored locally, through the composer or as seed data.
    Me,
    /// Authored by the counterparty.
    Them,
}

impl Side {
    /// Whether the message is self-authored.
    pub fn is_me(self) -> bool {
        matches!(self, Side::Me)
    }
}

// ===== Message =====

/// A single authored line of text with a side and a display timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within its log.
    pub id: MessageId,
    /// Message body; never blank for composer messages.
    pub text: String,
    /// Author side, which decides bubble alignment.
    pub side: Side,
    /// Display string, "HH:MM" for messages created by the composer.
    pub timestamp: String,
}

impl Message {
    /// Build a message from a raw id.
    pub fn new(id: u64, text: impl Into<String>, side: Side, timestamp: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(id),
            text: text.into(),
            side,
            timestamp: timestamp.into(),
        }
    }
}
