//! Chat directory: the read-only list of known conversations.

use crate::model::{Conversation, ConversationId, DataError};
use std::collections::HashSet;

/// Known conversations in fixed display order.
///
/// Display order is the order the data source supplied. The directory
/// never mutates after construction; selection and filtering are views on
/// top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatDirectory {
    entries: Vec<Conversation>,
}

impl ChatDirectory {
    /// Build a directory, rejecting duplicate conversation ids.
    pub fn new(entries: Vec<Conversation>) -> Result<Self, DataError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for conversation in &entries {
            if !seen.insert(conversation.id) {
                return Err(DataError::DuplicateConversation(conversation.id));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Conversation] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Display position of a conversation.
    pub fn position(&self, id: ConversationId) -> Option<usize> {
        self.entries.iter().position(|c| c.id == id)
    }

    /// The top entry.
    pub fn first(&self) -> Option<&Conversation> {
        self.entries.first()
    }

    /// Whether `id` names an entry.
    pub fn contains(&self, id: ConversationId) -> bool {
        self.get(id).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total unread count across all conversations, for the status bar.
    pub fn total_unread(&self) -> u32 {
        self.entries.iter().map(|c| c.unread).sum()
    }
}
