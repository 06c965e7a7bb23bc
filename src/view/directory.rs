//! Conversation directory panel: title, filter box and entries.

use crate::model::Conversation;
use crate::state::{AppState, DirectoryFilter, FocusPane};
use crate::view::layout::ShellAreas;
use crate::view::text::{pad_to_width, truncate_to_width};
use crate::view::ChatStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Panel title.
pub const DIRECTORY_TITLE: &str = "Чаты";
/// Shown in the filter box while it is empty.
pub const FILTER_PLACEHOLDER: &str = "Поиск чатов...";
/// Shown when the filter hides every entry.
pub const NO_MATCHES: &str = "Ничего не найдено";
/// Shown for an empty directory.
pub const NO_CONVERSATIONS: &str = "Нет чатов";

/// Columns reserved for the avatar glyph and the gap after it.
const AVATAR_COLUMNS: usize = 3;

/// Draw the directory panel: title, filter box and visible entries.
pub fn render_directory(
    frame: &mut Frame,
    areas: &ShellAreas,
    state: &AppState,
    styles: &ChatStyles,
) {
    let Some(panel) = areas.directory else {
        return;
    };
    let focused = state.focus == FocusPane::Directory;

    frame.render_widget(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles.pane_border(focused)),
        panel,
    );

    if let Some(title) = areas.directory_title {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(DIRECTORY_TITLE, styles.title),
        ]);
        frame.render_widget(Paragraph::new(line), title);
    }

    if let Some(filter_box) = areas.filter_box {
        render_filter_box(frame, filter_box, &state.filter, styles);
    }

    if areas.entries.is_empty() {
        render_empty_list(frame, areas, state, styles);
        return;
    }

    for (id, rect) in &areas.entries {
        if let Some(conversation) = state.directory().get(*id) {
            let selected = state.selector.is_selected(*id);
            render_entry(frame, *rect, conversation, selected, styles);
        }
    }
}

fn render_filter_box(frame: &mut Frame, area: Rect, filter: &DirectoryFilter, styles: &ChatStyles) {
    let editing = filter.is_editing();
    let line = match (filter.query(), editing) {
        (Some(query), true) => Line::from(vec![
            Span::raw(format!("⌕ {query}")),
            Span::styled(" ", styles.cursor),
        ]),
        (Some(query), false) => Line::from(format!("⌕ {query}")),
        (None, true) => Line::from(vec![
            Span::raw("⌕ "),
            Span::styled(" ", styles.cursor),
        ]),
        (None, false) => Line::styled(format!("⌕ {FILTER_PLACEHOLDER}"), styles.muted),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.pane_border(editing)),
    );
    frame.render_widget(paragraph, area);
}

fn render_empty_list(frame: &mut Frame, areas: &ShellAreas, state: &AppState, styles: &ChatStyles) {
    let (Some(panel), Some(filter_box)) = (areas.directory, areas.filter_box) else {
        return;
    };
    let below = filter_box.bottom() + 1;
    if below >= panel.bottom() {
        return;
    }

    let message = if state.directory().is_empty() {
        NO_CONVERSATIONS
    } else {
        NO_MATCHES
    };
    let area = Rect::new(filter_box.x, below, filter_box.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(message, styles.muted)).alignment(Alignment::Center),
        area,
    );
}

/// Two-line entry: avatar, name and time; then preview and unread badge.
fn render_entry(
    frame: &mut Frame,
    area: Rect,
    conversation: &Conversation,
    selected: bool,
    styles: &ChatStyles,
) {
    let width = usize::from(area.width);

    let name_style = if conversation.has_unread() {
        styles.title
    } else {
        Style::default()
    };

    let avatar = pad_to_width(&conversation.avatar_glyph(), AVATAR_COLUMNS - 1);
    let timestamp = conversation.timestamp.as_str();
    let name_room = width.saturating_sub(AVATAR_COLUMNS + timestamp.width() + 2);
    let name = truncate_to_width(&conversation.name, name_room);
    let name_fill = width.saturating_sub(AVATAR_COLUMNS + 1 + name.width() + timestamp.width());

    let first = Line::from(vec![
        Span::raw(" "),
        Span::raw(avatar),
        Span::raw(" "),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(name_fill)),
        Span::styled(timestamp.to_string(), styles.muted),
    ]);

    let badge = if conversation.has_unread() {
        format!(" {} ", conversation.unread)
    } else {
        String::new()
    };
    let preview_room = width.saturating_sub(AVATAR_COLUMNS + 1 + badge.width() + 1);
    let preview = truncate_to_width(&conversation.last_message, preview_room);
    let preview_fill = width.saturating_sub(AVATAR_COLUMNS + 1 + preview.width() + badge.width());

    let second = Line::from(vec![
        Span::raw(" ".repeat(AVATAR_COLUMNS + 1)),
        Span::styled(preview, styles.muted),
        Span::raw(" ".repeat(preview_fill)),
        Span::styled(badge, styles.unread_badge),
    ]);

    let style = if selected {
        styles.selected_entry.add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(vec![first, second]).style(style), area);
}
