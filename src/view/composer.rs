//! Composer row: attachment glyph, draft input and send button.

use crate::state::{AppState, FocusPane};
use crate::view::layout::ShellAreas;
use crate::view::text::truncate_to_width;
use crate::view::ChatStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown while the draft is empty.
pub const COMPOSER_PLACEHOLDER: &str = "Написать сообщение...";
/// Send button label.
pub const SEND_GLYPH: &str = "➤";
const ATTACH_GLYPH: &str = "+";

/// Draw the attach glyph, the draft input and the send button.
pub fn render_composer(frame: &mut Frame, areas: &ShellAreas, state: &AppState, styles: &ChatStyles) {
    let focused = state.focus == FocusPane::Composer;

    if let Some(attach) = areas.attach {
        let row = Rect {
            y: attach.y + attach.height / 2,
            height: attach.height.min(1),
            ..attach
        };
        frame.render_widget(
            Paragraph::new(Line::styled(ATTACH_GLYPH, styles.muted)).alignment(Alignment::Center),
            row,
        );
    }

    if let Some(input) = areas.composer_input {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles.pane_border(focused));
        let inner = block.inner(input);
        frame.render_widget(block, input);

        let lines = draft_lines(
            state.composer.draft(),
            state.composer.cursor(),
            inner,
            focused,
            styles,
        );
        frame.render_widget(Paragraph::new(lines), inner);
    }

    if let Some(send) = areas.send_button {
        let style = if state.composer.can_submit() {
            styles.send_ready
        } else {
            styles.muted
        };
        let button = Paragraph::new(Line::styled(SEND_GLYPH, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, send);
    }
}

/// Visible draft lines with the cursor cell highlighted when focused.
///
/// Shows the rows around the cursor line; the cursor line scrolls
/// horizontally so the cursor stays inside `area`.
fn draft_lines(
    draft: &str,
    cursor: usize,
    area: Rect,
    focused: bool,
    styles: &ChatStyles,
) -> Vec<Line<'static>> {
    let width = usize::from(area.width);

    if draft.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", styles.cursor));
        }
        spans.push(Span::styled(COMPOSER_PLACEHOLDER, styles.muted));
        return vec![Line::from(spans)];
    }

    let logical: Vec<&str> = draft.split('\n').collect();
    let (cursor_line, cursor_col) = locate_cursor(&logical, cursor);

    let height = usize::from(area.height).max(1);
    let start = (cursor_line + 1).saturating_sub(height);
    let end = (start + height).min(logical.len());

    logical[start..end]
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            if focused && start + offset == cursor_line {
                cursor_line_spans(text, cursor_col, width, styles)
            } else {
                Line::from(truncate_to_width(text, width))
            }
        })
        .collect()
}

/// Logical line and column (in chars) of a char cursor.
fn locate_cursor(lines: &[&str], cursor: usize) -> (usize, usize) {
    let mut remaining = cursor;
    for (index, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if remaining <= len {
            return (index, remaining);
        }
        remaining -= len + 1;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.get(last).map_or(0, |l| l.chars().count()))
}

fn cursor_line_spans(text: &str, col: usize, width: usize, styles: &ChatStyles) -> Line<'static> {
    let mut before: String = text.chars().take(col).collect();
    let at: String = text
        .chars()
        .nth(col)
        .map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = text.chars().skip(col + 1).collect();

    // Drop leading text until the cursor cell fits.
    while !before.is_empty() && before.width() + at.width() > width {
        before.remove(0);
    }

    let room_after = width.saturating_sub(before.width() + at.width());
    Line::from(vec![
        Span::raw(before),
        Span::styled(at, styles.cursor),
        Span::raw(truncate_to_width(&after, room_after)),
    ])
}
