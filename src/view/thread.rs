//! Message thread: header, bubbles and the empty-selection placeholder.
//!
//! Own messages are right-aligned, incoming ones left-aligned. The list is
//! scrolled in lines counted up from the newest message.

use crate::model::{Conversation, Message};
use crate::state::{AppState, MessageLog};
use crate::view::constants::BUBBLE_WIDTH_PERCENT;
use crate::view::layout::ShellAreas;
use crate::view::text::{pad_to_width, wrap_text};
use crate::view::ChatStyles;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Shown when no conversation is open.
pub const EMPTY_SELECTION_HINT: &str = "Выберите чат для начала общения";
/// Shown for an empty log.
pub const NO_MESSAGES: &str = "Сообщений пока нет";
const HEADER_ACTIONS: &str = "☏  ▶  ⋮ ";
const MIN_BUBBLE_WIDTH: usize = 12;

/// Draw the thread header, the message bubbles and the composer.
pub fn render_thread(frame: &mut Frame, areas: &ShellAreas, state: &AppState, styles: &ChatStyles) {
    let Some(conversation) = state.current_conversation() else {
        render_placeholder(frame, areas.thread, styles);
        return;
    };

    if let Some(header) = areas.header {
        render_header(frame, header, conversation, styles);
    }
    if let Some(messages) = areas.messages {
        render_messages(frame, messages, state.current_log(), state.thread_scroll, styles);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, styles: &ChatStyles) {
    let top_padding = usize::from(area.height / 2).saturating_sub(1);
    let mut lines = vec![Line::default(); top_padding];
    lines.push(Line::styled("✉", styles.muted));
    lines.push(Line::styled(EMPTY_SELECTION_HINT, styles.muted));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_header(frame: &mut Frame, area: Rect, conversation: &Conversation, styles: &ChatStyles) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::raw(pad_to_width(&conversation.avatar_glyph(), 2)),
            Span::raw(" "),
            Span::styled(conversation.name.clone(), styles.title),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(conversation.subtitle(), styles.muted),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let actions = Rect { height: 1, ..inner };
    frame.render_widget(
        Paragraph::new(Line::styled(HEADER_ACTIONS, styles.muted)).alignment(Alignment::Right),
        actions,
    );
}

fn render_messages(
    frame: &mut Frame,
    area: Rect,
    log: Option<&MessageLog>,
    scroll: u16,
    styles: &ChatStyles,
) {
    let inner = area.inner(Margin::new(1, 0));
    let lines = build_thread_lines(log, inner.width, styles);

    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(NO_MESSAGES, styles.muted)).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let range = visible_range(lines.len(), inner.height, scroll);
    frame.render_widget(Paragraph::new(lines[range].to_vec()), inner);
}

/// All rendered lines of a thread at the given width, oldest first.
pub fn build_thread_lines(
    log: Option<&MessageLog>,
    width: u16,
    styles: &ChatStyles,
) -> Vec<Line<'static>> {
    let Some(log) = log else {
        return Vec::new();
    };

    let width = usize::from(width);
    let bubble_width = (width * usize::from(BUBBLE_WIDTH_PERCENT) / 100)
        .max(MIN_BUBBLE_WIDTH)
        .min(width);
    let text_width = bubble_width.saturating_sub(2).max(1);

    let mut lines = Vec::new();
    for (index, message) in log.list().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(bubble_lines(message, text_width, styles));
    }
    lines
}

/// One bubble: padded text lines followed by the timestamp.
fn bubble_lines(message: &Message, text_width: usize, styles: &ChatStyles) -> Vec<Line<'static>> {
    let wrapped = wrap_text(&message.text, text_width);
    let inner = wrapped
        .iter()
        .map(|line| line.width())
        .chain(std::iter::once(message.timestamp.width()))
        .max()
        .unwrap_or(0);

    let style = styles.bubble(message.side);
    let alignment = if message.side.is_me() {
        Alignment::Right
    } else {
        Alignment::Left
    };

    let mut lines: Vec<Line<'static>> = wrapped
        .iter()
        .map(|text| {
            Line::from(Span::styled(format!(" {} ", pad_to_width(text, inner)), style))
                .alignment(alignment)
        })
        .collect();

    let stamp_pad = " ".repeat(inner.saturating_sub(message.timestamp.width()));
    lines.push(
        Line::from(Span::styled(
            format!(" {stamp_pad}{} ", message.timestamp),
            style.add_modifier(Modifier::DIM),
        ))
        .alignment(alignment),
    );
    lines
}

/// Largest useful scroll for a thread of `total_lines` in `height` rows.
pub fn max_scroll(total_lines: usize, height: u16) -> u16 {
    u16::try_from(total_lines.saturating_sub(usize::from(height))).unwrap_or(u16::MAX)
}

/// Scroll limit for the thread drawn into `messages_area`.
pub fn thread_max_scroll(log: Option<&MessageLog>, messages_area: Rect, styles: &ChatStyles) -> u16 {
    let inner = messages_area.inner(Margin::new(1, 0));
    max_scroll(build_thread_lines(log, inner.width, styles).len(), inner.height)
}

/// Lines shown for a scroll offset measured up from the newest line.
pub fn visible_range(total_lines: usize, height: u16, scroll: u16) -> Range<usize> {
    let height = usize::from(height);
    let scroll = usize::from(scroll).min(total_lines.saturating_sub(height));
    let end = total_lines - scroll;
    let start = end.saturating_sub(height);
    start..end
}
