//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating user
//! interactions in acceptance tests.

use crate::config::KeyBindings;
use crate::model::ConversationId;
use crate::source::{ChatData, DataSource};
use crate::state::{AppState, ThreadMode};
use crate::view::{ShellAreas, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::path::PathBuf;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every test module
impl AcceptanceTestHarness {
    /// Built-in sample data, shared thread, 100x30 terminal.
    pub fn with_sample() -> Self {
        Self::with_sample_sized(100, 30)
    }

    /// Built-in sample data with a custom terminal size.
    pub fn with_sample_sized(width: u16, height: u16) -> Self {
        let data = match DataSource::Builtin.load() {
            Ok(data) => data,
            Err(err) => unreachable!("built-in sample always loads: {err}"),
        };
        Self::from_data(data, ThreadMode::Shared, width, height)
            .unwrap_or_else(|err| panic!("TestBackend terminal creation failed: {err}"))
    }

    /// Load a JSON data fixture, relative to the crate root.
    pub fn from_data_file(path: &str, mode: ThreadMode) -> Result<Self, TuiError> {
        let data = DataSource::File(PathBuf::from(path))
            .load()
            .unwrap_or_else(|err| panic!("fixture {path} failed to load: {err}"));
        Self::from_data(data, mode, 100, 30)
    }

    fn from_data(data: ChatData, mode: ThreadMode, width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app_state = AppState::new(data.directory, data.messages, mode);
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Send a single key. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+B)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Areas of the most recent frame, rendering one first.
    pub fn areas(&mut self) -> ShellAreas {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        self.app.last_areas().cloned().unwrap_or_default()
    }

    /// Left click at a screen position, rendering first so hit testing sees
    /// the current layout.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }
        let _ = self.app.render_test();
        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Click the middle of a region.
    pub fn click_rect(&mut self, rect: Rect) {
        self.click_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
    }

    /// Click the directory entry of a conversation.
    pub fn click_conversation(&mut self, id: ConversationId) {
        let areas = self.areas();
        let rect = areas
            .entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, rect)| *rect)
            .unwrap_or_else(|| panic!("conversation {id} is not on screen"));
        self.click_rect(rect);
    }

    /// Mouse wheel notch at a screen position.
    pub fn scroll_at(&mut self, column: u16, row: u16, up: bool) {
        let kind = if up {
            MouseEventKind::ScrollUp
        } else {
            MouseEventKind::ScrollDown
        };
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }
}
