//! Directory filter ("search chats" box).
//!
//! A case-insensitive substring match over conversation names and message
//! previews. It only decides what is shown; the directory is never touched.

use crate::model::{Conversation, ConversationId};
use crate::state::ChatDirectory;

/// Filter query and whether the user is still typing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryFilter {
    /// No filter; every conversation is shown.
    #[default]
    Inactive,
    /// Query being edited. Matches update live as the user types.
    Editing {
        /// Text typed so far.
        query: String,
    },
    /// Query confirmed with Enter; keys go back to directory navigation.
    Applied {
        /// The confirmed text.
        query: String,
    },
}

impl DirectoryFilter {
    /// Start (or resume) editing, keeping any applied query.
    pub fn start_editing(&mut self) {
        let query = match std::mem::take(self) {
            DirectoryFilter::Inactive => String::new(),
            DirectoryFilter::Editing { query } | DirectoryFilter::Applied { query } => query,
        };
        *self = DirectoryFilter::Editing { query };
    }

    /// Append to the query being typed.
    pub fn push(&mut self, ch: char) {
        if let DirectoryFilter::Editing { query } = self {
            query.push(ch);
        }
    }

    /// Remove the last char of the query being typed.
    pub fn pop(&mut self) {
        if let DirectoryFilter::Editing { query } = self {
            query.pop();
        }
    }

    /// Confirm the query. A blank query deactivates the filter.
    pub fn apply(&mut self) {
        if let DirectoryFilter::Editing { query } = std::mem::take(self) {
            if !query.trim().is_empty() {
                *self = DirectoryFilter::Applied { query };
            }
        }
    }

    /// Drop the query and show every entry again.
    pub fn clear(&mut self) {
        *self = DirectoryFilter::Inactive;
    }

    /// Whether keys go to the filter box.
    pub fn is_editing(&self) -> bool {
        matches!(self, DirectoryFilter::Editing { .. })
    }

    /// The current query, typed or applied.
    pub fn query(&self) -> Option<&str> {
        match self {
            DirectoryFilter::Inactive => None,
            DirectoryFilter::Editing { query } | DirectoryFilter::Applied { query } => {
                Some(query.as_str())
            }
        }
    }

    /// Case-insensitive match on name and preview. A blank query matches
    /// everything.
    pub fn matches(&self, conversation: &Conversation) -> bool {
        let Some(query) = self.query().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let needle = query.to_lowercase();
        conversation.name.to_lowercase().contains(&needle)
            || conversation.last_message.to_lowercase().contains(&needle)
    }

    /// Conversations to display, in directory order.
    pub fn visible<'a>(&self, directory: &'a ChatDirectory) -> Vec<&'a Conversation> {
        directory
            .entries()
            .iter()
            .filter(|c| self.matches(c))
            .collect()
    }

    /// Ids of the conversations to display, in directory order.
    pub fn visible_ids(&self, directory: &ChatDirectory) -> Vec<ConversationId> {
        self.visible(directory).into_iter().map(|c| c.id).collect()
    }
}
