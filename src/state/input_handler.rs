//! Text input handling for the composer and the directory filter.
//!
//! These run before key-binding dispatch: while a text field has focus,
//! printable keys are text, not commands. Each handler returns `true` when
//! it consumed the key.

use crate::state::AppState;
use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether Enter should insert a line break instead of submitting.
///
/// Shift+Enter is the multi-line gesture. Many terminals cannot report Shift
/// on Enter, so Alt+Enter is accepted as well.
pub fn is_newline_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
        && key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
}

/// Handle a key while the composer has focus.
pub fn handle_composer_key(state: &mut AppState, key: KeyEvent, now: NaiveTime) -> bool {
    match key.code {
        KeyCode::Enter if is_newline_chord(key) => state.composer.insert_newline(),
        KeyCode::Enter => {
            state.submit(now);
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.composer.insert_char(ch)
        }
        KeyCode::Backspace => state.composer.backspace(),
        KeyCode::Delete => state.composer.delete(),
        KeyCode::Left => state.composer.move_left(),
        KeyCode::Right => state.composer.move_right(),
        KeyCode::Home => state.composer.move_home(),
        KeyCode::End => state.composer.move_end(),
        _ => return false,
    }
    true
}

/// Handle a key while the directory filter is being edited.
pub fn handle_filter_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.filter.is_editing() {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.filter.push(ch)
        }
        KeyCode::Backspace => state.filter.pop(),
        KeyCode::Enter => state.filter.apply(),
        KeyCode::Esc => state.filter.clear(),
        _ => return false,
    }
    true
}
