//! Help overlay listing keyboard and mouse controls.
//!
//! Shows a centered modal over the shell. Triggered by '?', dismissed by
//! 'Esc', '?' or a click anywhere.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::ChatStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Popup title.
pub const HELP_TITLE: &str = " Keyboard Shortcuts ";
/// Bottom border hint.
pub const HELP_DISMISS_HINT: &str = " Press Esc or ? to close ";

/// Width of the key column, in cells.
const KEY_COLUMN: usize = 16;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Chats",
        &[
            ("j/k  ↓/↑", "Select next / previous chat"),
            ("g/G  Home/End", "First / last chat"),
            ("Enter/i", "Open chat and write"),
            ("/  Ctrl+f", "Filter chats by name"),
            ("x", "Clear filter"),
        ],
    ),
    (
        "Message",
        &[
            ("Enter  Ctrl+s", "Send message"),
            ("Shift+Enter", "New line"),
            ("Esc", "Back to chat list"),
            ("PgUp/PgDn", "Scroll thread"),
        ],
    ),
    (
        "Application",
        &[
            ("Tab", "Switch pane"),
            ("Ctrl+b", "Collapse / expand sidebar"),
            ("?", "Toggle this help"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &ChatStyles) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(HELP_TITLE)
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        y: popup_area.y + popup_area.height.saturating_sub(1),
        height: popup_area.height.min(1),
        ..popup_area
    };
    let hint = Paragraph::new(Line::styled(
        HELP_DISMISS_HINT,
        styles.muted.add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rect of the given percentage of `area`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn build_help_content(styles: &ChatStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (section, entries)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(*section, styles.title));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN$}"), styles.key_hint),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
