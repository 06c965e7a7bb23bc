//! Message logs and the store that maps conversations onto them.

use crate::model::{ConversationId, Message, MessageId, Side};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

// ===== MessageLog =====

/// Ordered, append-only sequence of messages.
///
/// Ordering is insertion order. Ids come from a monotonic counter that
/// starts after the largest seeded id, so they stay unique even when seed
/// data is sparse or out of order. Once the counter passes `u64::MAX` the
/// log refuses further appends rather than reuse an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: Option<MessageId>,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: Some(MessageId::new(1)),
        }
    }
}

impl MessageLog {
    /// Empty log whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log pre-populated with seed messages, kept in given order.
    pub fn from_seed(messages: Vec<Message>) -> Self {
        let next_id = messages
            .iter()
            .map(|m| m.id)
            .max()
            .map_or(Some(MessageId::new(1)), MessageId::next);
        Self { messages, next_id }
    }

    /// Append a new message at the end of the log and return it.
    ///
    /// Returns `None` and leaves the log untouched when no unused id is left.
    pub fn append(
        &mut self,
        text: impl Into<String>,
        side: Side,
        timestamp: impl Into<String>,
    ) -> Option<&Message> {
        let Some(id) = self.next_id else {
            warn!(len = self.messages.len(), "Message ids exhausted; append refused");
            return None;
        };
        self.next_id = id.next();
        self.messages.push(Message {
            id,
            text: text.into(),
            side,
            timestamp: timestamp.into(),
        });
        debug!(message_id = %id, len = self.messages.len(), "Message appended");
        self.messages.last()
    }

    /// Messages in display order. Each call starts a fresh iteration.
    pub fn list(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// The newest message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ===== ThreadMode =====

/// How conversations map onto message logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadMode {
    /// One log shown for every conversation.
    #[default]
    Shared,
    /// Each conversation owns its own log.
    PerConversation,
}

impl ThreadMode {
    /// Name used on the command line and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            ThreadMode::Shared => "shared",
            ThreadMode::PerConversation => "per-conversation",
        }
    }
}

impl std::str::FromStr for ThreadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared" => Ok(ThreadMode::Shared),
            "per-conversation" => Ok(ThreadMode::PerConversation),
            other => Err(format!(
                "unknown thread mode '{other}' (expected 'shared' or 'per-conversation')"
            )),
        }
    }
}

// ===== MessageStore =====

/// Resolves the message log backing a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStore {
    /// One log for every conversation.
    Shared(MessageLog),
    /// Logs created lazily per conversation.
    PerConversation(HashMap<ConversationId, MessageLog>),
}

impl MessageStore {
    /// Build a store in the given mode.
    ///
    /// In per-conversation mode the seed belongs to `seed_owner`; when there
    /// is no owner (empty directory) the seed is dropped.
    pub fn new(mode: ThreadMode, seed: Vec<Message>, seed_owner: Option<ConversationId>) -> Self {
        match mode {
            ThreadMode::Shared => MessageStore::Shared(MessageLog::from_seed(seed)),
            ThreadMode::PerConversation => {
                let mut logs = HashMap::new();
                if let Some(owner) = seed_owner {
                    logs.insert(owner, MessageLog::from_seed(seed));
                }
                MessageStore::PerConversation(logs)
            }
        }
    }

    /// The mode this store was built in.
    pub fn mode(&self) -> ThreadMode {
        match self {
            MessageStore::Shared(_) => ThreadMode::Shared,
            MessageStore::PerConversation(_) => ThreadMode::PerConversation,
        }
    }

    /// Log for a conversation, if one exists yet.
    pub fn log(&self, id: ConversationId) -> Option<&MessageLog> {
        match self {
            MessageStore::Shared(log) => Some(log),
            MessageStore::PerConversation(logs) => logs.get(&id),
        }
    }

    /// Log for a conversation, created empty on first use.
    pub fn log_mut(&mut self, id: ConversationId) -> &mut MessageLog {
        match self {
            MessageStore::Shared(log) => log,
            MessageStore::PerConversation(logs) => logs.entry(id).or_default(),
        }
    }

    /// Number of messages shown for a conversation.
    pub fn len_for(&self, id: ConversationId) -> usize {
        self.log(id).map_or(0, MessageLog::len)
    }
}
