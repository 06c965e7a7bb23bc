//! TUI rendering and the event loop (impure shell).
//!
//! [`TuiApp`] owns the terminal and maps crossterm events onto the pure
//! state transitions in [`crate::state`]. Everything on screen is derived
//! from [`AppState`] by the renderers in the submodules.

pub mod composer;
pub mod constants;
pub mod directory;
mod help;
pub mod layout;
pub mod rail;
mod styles;
pub mod text;
pub mod thread;

pub use help::render_help_overlay;
pub use layout::{compute_areas, hit_test, render_layout, ShellAreas};
pub use styles::{ChatStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_click, handle_composer_key, handle_filter_key, handle_thread_wheel};
use crate::state::{AppState, FocusPane};
use chrono::NaiveTime;
use constants::DEFAULT_SCROLL_PAGE;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(source) => crate::model::AppError::Terminal(source),
        }
    }
}

/// Terminal modes switched on at startup that must be switched off again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalFeatures {
    /// Mouse capture was enabled.
    pub mouse_capture: bool,
    /// Kitty keyboard protocol, needed to tell Shift+Enter from Enter.
    pub keyboard_enhancement: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ChatStyles,
    /// Wall clock used to stamp sent messages.
    clock: fn() -> NaiveTime,
    /// Areas of the last drawn frame (for mouse hit testing)
    last_areas: Option<ShellAreas>,
    features: TerminalFeatures,
}

fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, args: &CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;

        let mut features = TerminalFeatures::default();
        if args.mouse {
            stdout.execute(EnableMouseCapture)?;
            features.mouse_capture = true;
        }
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            stdout.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
            ))?;
            features.keyboard_enhancement = true;
        }
        debug!(?features, "Terminal initialized");

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ChatStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
            clock: local_time,
            last_areas: None,
            features,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events and
    /// redraws only after one arrives.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        let now = (self.clock)();

        // Help overlay swallows everything except its own dismissal and quit
        if self.app_state.help_visible {
            if key.code == KeyCode::Esc {
                self.app_state.help_visible = false;
                return false;
            }
            return match self.key_bindings.get(key) {
                Some(action) if action.allowed_over_help() => self.dispatch(action, now),
                _ => false,
            };
        }

        // Text fields take printable keys before bindings
        if handle_filter_key(&mut self.app_state, key) {
            return false;
        }
        if self.app_state.focus == FocusPane::Composer
            && handle_composer_key(&mut self.app_state, key, now)
        {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.dispatch(action, now),
            None => false,
        }
    }

    /// Apply a bound action. Returns true if app should quit.
    fn dispatch(&mut self, action: KeyAction, now: NaiveTime) -> bool {
        debug!(?action, "Dispatching key action");
        let page = self.page_height();
        let state = &mut self.app_state;
        let directory_focused = state.focus == FocusPane::Directory;

        match action {
            KeyAction::SelectNext if directory_focused => state.select_next(),
            KeyAction::SelectPrev if directory_focused => state.select_prev(),
            KeyAction::SelectFirst if directory_focused => state.select_first(),
            KeyAction::SelectLast if directory_focused => state.select_last(),
            KeyAction::SelectNext
            | KeyAction::SelectPrev
            | KeyAction::SelectFirst
            | KeyAction::SelectLast => {}
            KeyAction::OpenConversation => state.focus_composer(),
            KeyAction::CycleFocus => state.cycle_focus(),
            KeyAction::FocusDirectory => state.focus_directory(),
            KeyAction::Send => {
                state.submit(now);
            }
            KeyAction::ToggleSidebar => state.toggle_sidebar(),
            KeyAction::StartFilter => state.start_filter(),
            KeyAction::ClearFilter => state.filter.clear(),
            KeyAction::ScrollUp => state.scroll_thread_up(page),
            KeyAction::ScrollDown => state.scroll_thread_down(page),
            KeyAction::Help => state.help_visible = !state.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Rows of the message list, used as the scroll page.
    fn page_height(&self) -> u16 {
        self.last_areas
            .as_ref()
            .and_then(|areas| areas.messages)
            .map_or(DEFAULT_SCROLL_PAGE, |rect| rect.height.max(1))
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let areas = match self.last_areas.take() {
            Some(areas) => areas,
            None => self.frame_areas(),
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.app_state.help_visible => {
                self.app_state.help_visible = false;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = hit_test(&areas, mouse.column, mouse.row) {
                    debug!(?target, column = mouse.column, row = mouse.row, "Click");
                    handle_click(&mut self.app_state, target, (self.clock)());
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                if !self.app_state.help_visible
                    && areas.is_over_messages(mouse.column, mouse.row) =>
            {
                handle_thread_wheel(
                    &mut self.app_state,
                    mouse.kind == MouseEventKind::ScrollUp,
                );
            }
            _ => {}
        }

        self.last_areas = Some(areas);
    }

    /// Areas for the current terminal size and state.
    fn frame_areas(&self) -> ShellAreas {
        let size = self.terminal.size().unwrap_or_default();
        compute_areas(Rect::new(0, 0, size.width, size.height), &self.app_state)
    }

    /// Render the current state
    fn draw(&mut self) -> Result<(), TuiError> {
        let areas = self.frame_areas();

        if let Some(messages) = areas.messages {
            let max = thread::thread_max_scroll(self.app_state.current_log(), messages, &self.styles);
            self.app_state.thread_scroll = self.app_state.thread_scroll.min(max);
        }

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, &areas, styles))?;

        self.last_areas = Some(areas);
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Test-only accessors for the acceptance harness.
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization and stamps messages at a fixed 12:00.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: ChatStyles::with_color_config(ColorConfig::from_env_and_args(true)),
            clock: || NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
            last_areas: None,
            features: TerminalFeatures::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn last_areas(&self) -> Option<&ShellAreas> {
        self.last_areas.as_ref()
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of resolved settings that configures the terminal layer
/// rather than the domain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// Disable colors (`--no-color` or `NO_COLOR`).
    pub no_color: bool,
    /// Capture mouse clicks and wheel.
    pub mouse: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            no_color: false,
            mouse: true,
        }
    }
}

/// Initialize and run the TUI over prepared state.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub fn run_with_state(app_state: AppState, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, &args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal(app.features)?;

    result
}

/// Restore terminal to normal state
fn restore_terminal(features: TerminalFeatures) -> Result<(), TuiError> {
    let mut stdout = io::stdout();
    if features.keyboard_enhancement {
        stdout.execute(PopKeyboardEnhancementFlags)?;
    }
    if features.mouse_capture {
        stdout.execute(DisableMouseCapture)?;
    }
    disable_raw_mode()?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}
