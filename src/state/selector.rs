//! Conversation selection state.

use crate::model::ConversationId;

/// Tracks which conversation, if any, is open.
///
/// At most one conversation is selected at a time and nothing ever clears
/// the selection automatically. Stepping functions take the ordered list of
/// candidates currently on screen (the filtered directory) so keyboard
/// navigation moves through exactly what the user sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationSelector {
    current: Option<ConversationId>,
}

impl ConversationSelector {
    /// Selector starting on `initial`.
    pub fn new(initial: Option<ConversationId>) -> Self {
        Self { current: initial }
    }

    /// Open a conversation. Selecting the open one again changes nothing.
    pub fn select(&mut self, id: ConversationId) {
        self.current = Some(id);
    }

    /// The active conversation.
    pub fn current(&self) -> Option<ConversationId> {
        self.current
    }

    /// Whether `id` is the active conversation.
    pub fn is_selected(&self, id: ConversationId) -> bool {
        self.current == Some(id)
    }

    /// Step to the next candidate, saturating at the last one.
    ///
    /// When the current selection is not among the candidates (hidden by a
    /// filter, or nothing selected) the first candidate is chosen.
    pub fn select_next(&mut self, candidates: &[ConversationId]) {
        let next = match self.position_in(candidates) {
            Some(pos) => candidates.get(pos + 1).or(candidates.get(pos)),
            None => candidates.first(),
        };
        if let Some(&id) = next {
            self.select(id);
        }
    }

    /// Step to the previous candidate, saturating at the first one.
    pub fn select_prev(&mut self, candidates: &[ConversationId]) {
        let prev = match self.position_in(candidates) {
            Some(pos) => candidates.get(pos.saturating_sub(1)),
            None => candidates.first(),
        };
        if let Some(&id) = prev {
            self.select(id);
        }
    }

    /// Select the first candidate; no-op when there are none.
    pub fn select_first(&mut self, candidates: &[ConversationId]) {
        if let Some(&id) = candidates.first() {
            self.select(id);
        }
    }

    /// Select the last candidate; no-op when there are none.
    pub fn select_last(&mut self, candidates: &[ConversationId]) {
        if let Some(&id) = candidates.last() {
            self.select(id);
        }
    }

    fn position_in(&self, candidates: &[ConversationId]) -> Option<usize> {
        let current = self.current?;
        candidates.iter().position(|&id| id == current)
    }
}
