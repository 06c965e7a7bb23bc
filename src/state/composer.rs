//! Outgoing message composer.
//!
//! Holds the in-progress draft and turns a submit into a message-log entry.
//! The cursor is a char index, never a byte index, so editing Cyrillic or
//! emoji input cannot split a code point.

use crate::model::{MessageId, Side};
use crate::state::MessageLog;
use chrono::NaiveTime;
use tracing::{debug, info, warn};

/// Timestamp format for composer-created messages: 24-hour "HH:MM".
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

/// Draft text plus cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
    cursor: usize,
}

impl Composer {
    /// Empty draft with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft exactly as typed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the draft verbatim and park the cursor at the end.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.cursor = self.char_len();
    }

    /// Insert `ch` at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.draft.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a line break (Shift+Enter). Never submits.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.draft.remove(at);
        self.cursor -= 1;
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.draft.remove(at);
    }

    /// Move the cursor one char left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Move the cursor to the start of the draft.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the draft.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Whether a submit right now would produce a message.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Submit the draft into `log`.
    ///
    /// A draft that is empty after trimming is left untouched and nothing is
    /// appended. Otherwise the trimmed text is appended as a [`Side::Me`]
    /// message stamped with `now`, and the draft is cleared.
    pub fn submit(&mut self, log: &mut MessageLog, now: NaiveTime) -> Option<MessageId> {
        let text = self.draft.trim();
        if text.is_empty() {
            debug!("Ignoring submit of blank draft");
            return None;
        }

        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let Some(sent) = log.append(text, Side::Me, timestamp) else {
            warn!("Log is out of message ids; keeping draft");
            return None;
        };
        let id = sent.id;
        info!(message_id = %id, log_len = log.len(), "Message sent");

        self.draft.clear();
        self.cursor = 0;
        Some(id)
    }

    fn char_len(&self) -> usize {
        self.draft.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_idx)
            .map_or(self.draft.len(), |(i, _)| i)
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
