//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Text entry (composer draft, filter
/// query) is handled before this table is consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup. Terminals disagree on
    /// whether shifted symbols like `?` carry SHIFT, so character keys are
    /// retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        }
    }

    /// All keys bound to `action`.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| format!("{:?}", key.code));
        keys
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };

        // Directory navigation
        kb.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext);
        kb.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        kb.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev);
        kb.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        kb.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst);
        kb.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst);
        kb.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        kb.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::SelectLast);
        kb.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast);
        kb.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::OpenConversation);
        kb.bind(KeyCode::Char('i'), KeyModifiers::NONE, KeyAction::OpenConversation);

        // Focus switching
        kb.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);
        kb.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::FocusDirectory);

        // Composer
        kb.bind(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyAction::Send);

        // Layout
        kb.bind(KeyCode::Char('b'), KeyModifiers::CONTROL, KeyAction::ToggleSidebar);

        // Filter
        kb.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartFilter);
        kb.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartFilter);
        kb.bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::ClearFilter);

        // Thread scrolling
        kb.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::ScrollUp);
        kb.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ScrollUp);
        kb.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::ScrollDown);
        kb.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::ScrollDown);

        // Application controls
        kb.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        kb.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        kb
    }
}
