//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It is owned by
//! the TUI and handed to rendering as a shared reference; every change goes
//! through the methods below in response to a single user event.

use crate::model::{Conversation, ConversationId, Message, MessageId};
use crate::state::{
    ChatDirectory, Composer, ConversationSelector, DirectoryFilter, LayoutShell, MessageLog,
    MessageStore, ThreadMode,
};
use chrono::NaiveTime;
use tracing::{debug, info};

// ===== FocusPane =====

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Conversation list: navigation keys move the selection.
    Directory,
    /// Composer: printable keys edit the draft.
    #[default]
    Composer,
}

// ===== AppState =====

/// Application state. Pure data, no terminal access.
///
/// # State Machine
///
/// - **Selection**: none or one conversation; set by click or navigation keys
/// - **Focus**: Directory ⇄ Composer (composer only with an open conversation)
/// - **Layout**: directory panel expanded ⇄ collapsed
/// - **Filter**: Inactive → Editing → Applied → Inactive
#[derive(Debug, Clone)]
pub struct AppState {
    directory: ChatDirectory,
    messages: MessageStore,

    /// Open conversation.
    pub selector: ConversationSelector,

    /// Draft being written in the open conversation.
    pub composer: Composer,

    /// Directory panel expanded/collapsed.
    pub layout: LayoutShell,

    /// Directory filter box state.
    pub filter: DirectoryFilter,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Thread scroll, in lines above the newest message. 0 pins the view
    /// to the bottom.
    pub thread_scroll: u16,
}

impl AppState {
    /// Create state over a directory and its message seed.
    ///
    /// The first directory entry starts selected and owns the seed in
    /// per-conversation mode.
    pub fn new(directory: ChatDirectory, seed: Vec<Message>, mode: ThreadMode) -> Self {
        let first = directory.first().map(|c| c.id);
        let focus = if first.is_some() {
            FocusPane::Composer
        } else {
            FocusPane::Directory
        };
        Self {
            messages: MessageStore::new(mode, seed, first),
            directory,
            selector: ConversationSelector::new(first),
            composer: Composer::new(),
            layout: LayoutShell::default(),
            filter: DirectoryFilter::Inactive,
            focus,
            help_visible: false,
            thread_scroll: 0,
        }
    }

    /// The full, unfiltered directory.
    pub fn directory(&self) -> &ChatDirectory {
        &self.directory
    }

    /// Every message log.
    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    /// The open conversation, if any.
    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.selector
            .current()
            .and_then(|id| self.directory.get(id))
    }

    /// Log of the open conversation. `None` when nothing is open or the
    /// conversation has no messages yet in per-conversation mode.
    pub fn current_log(&self) -> Option<&MessageLog> {
        self.selector.current().and_then(|id| self.messages.log(id))
    }

    /// Conversations currently listed, after filtering.
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.filter.visible(&self.directory)
    }

    // ===== Selection =====

    /// Open a conversation from the directory.
    ///
    /// Ids that are not in the directory are ignored; the view only ever
    /// passes ids it enumerated from the directory.
    pub fn select(&mut self, id: ConversationId) {
        if !self.directory.contains(id) {
            debug!(conversation_id = %id, "Ignoring selection of unknown conversation");
            return;
        }
        if self.selector.is_selected(id) {
            return;
        }
        self.selector.select(id);
        self.thread_scroll = 0;
        info!(conversation_id = %id, "Conversation selected");
    }

    /// Move the selection down the visible list.
    pub fn select_next(&mut self) {
        let candidates = self.filter.visible_ids(&self.directory);
        let mut selector = self.selector;
        selector.select_next(&candidates);
        self.apply_selection(selector);
    }

    /// Move the selection up the visible list.
    pub fn select_prev(&mut self) {
        let candidates = self.filter.visible_ids(&self.directory);
        let mut selector = self.selector;
        selector.select_prev(&candidates);
        self.apply_selection(selector);
    }

    /// Select the top of the visible list.
    pub fn select_first(&mut self) {
        let candidates = self.filter.visible_ids(&self.directory);
        let mut selector = self.selector;
        selector.select_first(&candidates);
        self.apply_selection(selector);
    }

    /// Select the bottom of the visible list.
    pub fn select_last(&mut self) {
        let candidates = self.filter.visible_ids(&self.directory);
        let mut selector = self.selector;
        selector.select_last(&candidates);
        self.apply_selection(selector);
    }

    fn apply_selection(&mut self, stepped: ConversationSelector) {
        if let Some(id) = stepped.current() {
            self.select(id);
        }
    }

    // ===== Composer =====

    /// Submit the draft into the open conversation's log.
    ///
    /// No-op without an open conversation or with a blank draft.
    pub fn submit(&mut self, now: NaiveTime) -> Option<MessageId> {
        let Some(id) = self.selector.current() else {
            debug!("Ignoring submit with no open conversation");
            return None;
        };
        let log = self.messages.log_mut(id);
        let sent = self.composer.submit(log, now);
        if sent.is_some() {
            self.thread_scroll = 0;
        }
        sent
    }

    // ===== Layout and focus =====

    /// Collapse or expand the directory panel. Collapsing applies a filter
    /// that is still being typed.
    pub fn toggle_sidebar(&mut self) {
        self.layout.toggle();
        if !self.layout.is_expanded() && self.filter.is_editing() {
            self.filter.apply();
        }
        debug!(expanded = self.layout.is_expanded(), "Sidebar toggled");
    }

    /// Open the filter box for typing, expanding the directory panel first
    /// if it is collapsed.
    pub fn start_filter(&mut self) {
        if !self.layout.is_expanded() {
            self.layout.toggle();
        }
        self.filter.start_editing();
        self.focus = FocusPane::Directory;
    }

    /// Directory → Composer → Directory. The composer is skipped when no
    /// conversation is open.
    pub fn cycle_focus(&mut self) {
        match self.focus {
            FocusPane::Directory => self.focus_composer(),
            FocusPane::Composer => self.focus_directory(),
        }
    }

    /// Focus the composer if a conversation is open. A filter query being
    /// typed is kept as applied.
    pub fn focus_composer(&mut self) {
        if self.selector.current().is_none() {
            return;
        }
        if self.filter.is_editing() {
            self.filter.apply();
        }
        self.focus = FocusPane::Composer;
    }

    /// Give keyboard focus to the directory.
    pub fn focus_directory(&mut self) {
        self.focus = FocusPane::Directory;
    }

    // ===== Thread scrolling =====

    /// Scroll back towards older messages.
    pub fn scroll_thread_up(&mut self, lines: u16) {
        self.thread_scroll = self.thread_scroll.saturating_add(lines);
    }

    /// Scroll towards the newest message.
    pub fn scroll_thread_down(&mut self, lines: u16) {
        self.thread_scroll = self.thread_scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
