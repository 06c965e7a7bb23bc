//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry in the composer and the filter box bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Directory navigation
    /// Select the next visible conversation. Default: j/↓
    SelectNext,
    /// Select the previous visible conversation. Default: k/↑
    SelectPrev,
    /// Select the first visible conversation. Default: g/Home
    SelectFirst,
    /// Select the last visible conversation. Default: G/End
    SelectLast,
    /// Move focus to the composer of the open conversation. Default: Enter/i
    OpenConversation,

    // Focus
    /// Cycle focus: Directory → Composer → Directory. Default: Tab
    CycleFocus,
    /// Return focus to the directory. Default: Esc
    FocusDirectory,

    // Composer
    /// Submit the current draft. Default: Ctrl+s
    Send,

    // Layout
    /// Expand or collapse the directory panel. Default: Ctrl+b
    ToggleSidebar,

    // Directory filter
    /// Start editing the directory filter. Default: /
    StartFilter,
    /// Clear the directory filter. Default: x
    ClearFilter,

    // Thread scrolling
    /// Scroll the thread one page towards older messages. Default: PageUp
    ScrollUp,
    /// Scroll the thread one page towards newer messages. Default: PageDown
    ScrollDown,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Toggle the help overlay. Default: ?
    Help,
}

impl KeyAction {
    /// Actions that stay live while the help overlay is open.
    pub fn allowed_over_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}
