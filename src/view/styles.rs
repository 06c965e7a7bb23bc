//! Chat styling configuration.
//!
//! Colors distinguish own and incoming bubbles, the selected conversation,
//! unread badges and the focused pane. Everything degrades to modifiers
//! (bold, reversed, dim) when colors are disabled.

use crate::model::Side;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ChatStyles =====

/// Resolved styles for every chat widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatStyles {
    /// Panel titles and conversation names.
    pub title: Style,
    /// Secondary text: previews, times, placeholders.
    pub muted: Style,
    /// Unfocused pane borders.
    pub border: Style,
    /// Border of the pane holding keyboard focus.
    pub focused_border: Style,
    /// Highlighted directory entry.
    pub selected_entry: Style,
    /// Unread count badge.
    pub unread_badge: Style,
    /// Self-authored message bubbles.
    pub own_bubble: Style,
    /// Incoming message bubbles.
    pub their_bubble: Style,
    /// Rail glyphs.
    pub rail_icon: Style,
    /// Rail glyph of the active section.
    pub rail_active: Style,
    /// Text cursor in input boxes.
    pub cursor: Style,
    /// Send button while the draft can be sent.
    pub send_ready: Style,
    /// Key names in the help overlay and status bar.
    pub key_hint: Style,
}

impl ChatStyles {
    /// Styles following `NO_COLOR` only.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Cyan),
                selected_entry: Style::default().bg(Color::Rgb(40, 48, 64)),
                unread_badge: bold.fg(Color::Black).bg(Color::Cyan),
                own_bubble: Style::default().fg(Color::White).bg(Color::Blue),
                their_bubble: Style::default().fg(Color::White).bg(Color::Rgb(55, 55, 60)),
                rail_icon: Style::default().fg(Color::Gray),
                rail_active: bold.fg(Color::Cyan),
                cursor: bold.fg(Color::Black).bg(Color::White),
                send_ready: bold.fg(Color::Cyan),
                key_hint: bold.fg(Color::Yellow),
            }
        } else {
            Self {
                title: bold,
                muted: Style::default().add_modifier(Modifier::DIM),
                border: Style::default(),
                focused_border: bold,
                selected_entry: reversed,
                unread_badge: reversed,
                own_bubble: reversed,
                their_bubble: Style::default(),
                rail_icon: Style::default(),
                rail_active: bold,
                cursor: reversed,
                send_ready: bold,
                key_hint: bold,
            }
        }
    }

    /// Bubble style for a message side.
    pub fn bubble(&self, side: Side) -> Style {
        match side {
            Side::Me => self.own_bubble,
            Side::Them => self.their_bubble,
        }
    }

    /// Border style for a pane, highlighted when it has focus.
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for ChatStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
