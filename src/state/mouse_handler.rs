//! Mouse event handling (pure state transitions).
//!
//! The view resolves screen coordinates to a [`ClickTarget`]; this module
//! only decides what each target does to the state.

use crate::model::ConversationId;
use crate::state::AppState;
use chrono::NaiveTime;

/// Lines scrolled per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: u16 = 3;

/// Interactive region under a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Menu button on the navigation rail.
    SidebarToggle,
    /// A directory entry.
    Conversation(ConversationId),
    /// The filter box at the top of the directory.
    FilterBox,
    /// The draft input field.
    ComposerInput,
    /// The send button next to the composer.
    SendButton,
}

/// Apply a left click.
pub fn handle_click(state: &mut AppState, target: ClickTarget, now: NaiveTime) {
    match target {
        ClickTarget::SidebarToggle => state.toggle_sidebar(),
        ClickTarget::Conversation(id) => {
            state.select(id);
            state.focus_directory();
        }
        ClickTarget::FilterBox => state.start_filter(),
        ClickTarget::ComposerInput => state.focus_composer(),
        ClickTarget::SendButton => {
            state.submit(now);
        }
    }
}

/// Apply a wheel notch over the thread.
pub fn handle_thread_wheel(state: &mut AppState, is_scroll_up: bool) {
    if is_scroll_up {
        state.scroll_thread_up(WHEEL_SCROLL_LINES);
    } else {
        state.scroll_thread_down(WHEEL_SCROLL_LINES);
    }
}
