//! Conversation entries shown in the chat directory.

use crate::model::ConversationId;
use serde::{Deserialize, Serialize};

/// A named chat thread, either one-to-one or group.
///
/// Supplied by the data source at startup and never mutated afterwards:
/// there is no read-receipt logic, so `unread` and `last_message` stay as
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique within the directory.
    pub id: ConversationId,
    /// Display name.
    pub name: String,
    /// Avatar reference (URL or path). Terminals cannot draw it, so the
    /// view falls back to [`Conversation::avatar_glyph`].
    #[serde(default)]
    pub avatar: Option<String>,
    /// Preview of the most recent message.
    #[serde(default)]
    pub last_message: String,
    /// Last-activity label, already formatted for display ("14:32", "Вчера").
    #[serde(default)]
    pub timestamp: String,
    /// Unread badge count; zero hides the badge.
    #[serde(default)]
    pub unread: u32,
    /// Group chat rather than one-to-one.
    #[serde(default)]
    pub is_group: bool,
    /// Member count shown in the thread header for group chats.
    #[serde(default)]
    pub members: Option<u32>,
}

impl Conversation {
    /// Create a one-to-one conversation with empty preview fields.
    pub fn direct(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ConversationId::new(id),
            name: name.into(),
            avatar: None,
            last_message: String::new(),
            timestamp: String::new(),
            unread: 0,
            is_group: false,
            members: None,
        }
    }

    /// Create a group conversation with empty preview fields.
    pub fn group(id: u32, name: impl Into<String>) -> Self {
        Self {
            is_group: true,
            ..Self::direct(id, name)
        }
    }

    /// Set the last-message preview and its time label.
    pub fn with_preview(
        mut self,
        last_message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        self.last_message = last_message.into();
        self.timestamp = timestamp.into();
        self
    }

    /// Set the unread badge count.
    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }

    /// Set the group member count.
    pub fn with_members(mut self, members: u32) -> Self {
        self.members = Some(members);
        self
    }

    /// Single-glyph avatar fallback: a people icon for groups, otherwise the
    /// first letter of the name.
    pub fn avatar_glyph(&self) -> String {
        if self.is_group {
            return "👥".to_string();
        }
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Second line of the thread header.
    pub fn subtitle(&self) -> String {
        match (self.is_group, self.members) {
            (true, Some(n)) => format!("{n} участников"),
            (true, None) => "группа".to_string(),
            (false, _) => "в сети".to_string(),
        }
    }

    /// Whether the unread badge is shown.
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}
