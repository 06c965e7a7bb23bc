//! Screen layout: rail, directory panel, thread and status bar.
//!
//! Areas are computed once per frame by [`compute_areas`]. The same result
//! drives rendering and mouse hit testing, so a click always lands on what
//! was drawn.

use crate::model::ConversationId;
use crate::state::{AppState, ClickTarget, FocusPane};
use crate::view::constants::{
    ATTACH_WIDTH, COMPOSER_MAX_LINES, DIRECTORY_TITLE_HEIGHT, DIRECTORY_WIDTH, ENTRY_HEIGHT,
    FILTER_BOX_HEIGHT, MIN_THREAD_WIDTH, RAIL_WIDTH, SEND_BUTTON_WIDTH, STATUS_BAR_HEIGHT,
    THREAD_HEADER_HEIGHT,
};
use crate::view::{composer, directory, help, rail, thread, ChatStyles};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Every interactive or rendered region of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellAreas {
    /// Icon rail on the far left.
    pub rail: Rect,
    /// Menu button; present in both layouts.
    pub toggle: Rect,
    /// Search glyph on the rail (expanded layout only).
    pub rail_search: Option<Rect>,
    /// Directory panel (expanded layout only).
    pub directory: Option<Rect>,
    /// Panel title row.
    pub directory_title: Option<Rect>,
    /// Filter input under the title.
    pub filter_box: Option<Rect>,
    /// Directory entries on screen, top to bottom.
    pub entries: Vec<(ConversationId, Rect)>,
    /// Everything right of the sidebar.
    pub thread: Rect,
    /// Thread header with name and subtitle.
    pub header: Option<Rect>,
    /// Message list.
    pub messages: Option<Rect>,
    /// Attach glyph left of the input.
    pub attach: Option<Rect>,
    /// Draft input box.
    pub composer_input: Option<Rect>,
    /// Send button right of the input.
    pub send_button: Option<Rect>,
    /// Status bar along the bottom row.
    pub status: Rect,
}

impl ShellAreas {
    /// Whether a point lies over the message list.
    pub fn is_over_messages(&self, column: u16, row: u16) -> bool {
        self.messages
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }
}

/// Lay out the frame for the current state.
pub fn compute_areas(area: Rect, state: &AppState) -> ShellAreas {
    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)]).areas(area);

    let directory_width = if state.layout.is_expanded() {
        DIRECTORY_WIDTH.min(body.width.saturating_sub(RAIL_WIDTH + MIN_THREAD_WIDTH))
    } else {
        0
    };

    let [rail, directory, thread] = Layout::horizontal([
        Constraint::Length(RAIL_WIDTH),
        Constraint::Length(directory_width),
        Constraint::Min(0),
    ])
    .areas(body);

    let rail_inner_width = rail.width.saturating_sub(1);
    let toggle = Rect::new(rail.x, rail.y, rail_inner_width, rail.height.min(1));
    let rail_search = (state.layout.is_expanded() && rail.height > 4)
        .then(|| Rect::new(rail.x, rail.y + 4, rail_inner_width, 1));

    let mut areas = ShellAreas {
        rail,
        toggle,
        rail_search,
        thread,
        status,
        ..ShellAreas::default()
    };

    if directory.width > 0 {
        layout_directory(&mut areas, directory, state);
    }
    if state.current_conversation().is_some() {
        layout_thread(&mut areas, thread, state);
    }

    areas
}

fn layout_directory(areas: &mut ShellAreas, directory: Rect, state: &AppState) {
    // Right column is the panel border.
    let inner = Rect {
        width: directory.width.saturating_sub(1),
        ..directory
    };
    let [title, filter_box, list] = Layout::vertical([
        Constraint::Length(DIRECTORY_TITLE_HEIGHT),
        Constraint::Length(FILTER_BOX_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(inner);

    let visible = state.visible_conversations();
    let capacity = usize::from(list.height / ENTRY_HEIGHT);
    let selected_index = state
        .selector
        .current()
        .and_then(|id| visible.iter().position(|c| c.id == id))
        .unwrap_or(0);
    let offset = if capacity > 0 && selected_index >= capacity {
        selected_index + 1 - capacity
    } else {
        0
    };

    areas.entries = visible
        .iter()
        .skip(offset)
        .take(capacity)
        .enumerate()
        .map(|(row, conversation)| {
            let y = list.y + (row as u16) * ENTRY_HEIGHT;
            let height = (ENTRY_HEIGHT - 1).min(list.bottom().saturating_sub(y));
            (conversation.id, Rect::new(list.x, y, list.width, height))
        })
        .collect();

    areas.directory = Some(directory);
    areas.directory_title = Some(title);
    areas.filter_box = Some(filter_box);
}

fn layout_thread(areas: &mut ShellAreas, thread: Rect, state: &AppState) {
    let [header, messages, composer_row] = Layout::vertical([
        Constraint::Length(THREAD_HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(composer_height(state.composer.draft())),
    ])
    .areas(thread);

    let [attach, input, send] = Layout::horizontal([
        Constraint::Length(ATTACH_WIDTH),
        Constraint::Min(0),
        Constraint::Length(SEND_BUTTON_WIDTH),
    ])
    .areas(composer_row);

    areas.header = Some(header);
    areas.messages = Some(messages);
    areas.attach = Some(attach);
    areas.composer_input = Some(input);
    areas.send_button = Some(send);
}

/// Composer height: draft lines (capped) plus the input border.
pub fn composer_height(draft: &str) -> u16 {
    let lines = draft.split('\n').count().max(1);
    let lines = u16::try_from(lines).unwrap_or(u16::MAX).min(COMPOSER_MAX_LINES);
    lines + 2
}

/// Resolve a left click to the control under it.
pub fn hit_test(areas: &ShellAreas, column: u16, row: u16) -> Option<ClickTarget> {
    let point = Position::new(column, row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(point));

    if areas.toggle.contains(point) {
        return Some(ClickTarget::SidebarToggle);
    }
    if hit(areas.rail_search) || hit(areas.filter_box) {
        return Some(ClickTarget::FilterBox);
    }
    if let Some((id, _)) = areas.entries.iter().find(|(_, rect)| rect.contains(point)) {
        return Some(ClickTarget::Conversation(*id));
    }
    if hit(areas.send_button) {
        return Some(ClickTarget::SendButton);
    }
    if hit(areas.composer_input) {
        return Some(ClickTarget::ComposerInput);
    }
    None
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, areas: &ShellAreas, styles: &ChatStyles) {
    rail::render_rail(frame, areas, state, styles);
    if areas.directory.is_some() {
        directory::render_directory(frame, areas, state, styles);
    }
    thread::render_thread(frame, areas, state, styles);
    if areas.composer_input.is_some() {
        composer::render_composer(frame, areas, state, styles);
    }
    render_status_bar(frame, areas.status, state, styles);

    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ChatStyles) {
    let pane = if state.filter.is_editing() {
        " FILTER "
    } else {
        match state.focus {
            FocusPane::Directory => " CHATS ",
            FocusPane::Composer => " MESSAGE ",
        }
    };

    let hints: &[(&str, &str)] = match state.focus {
        FocusPane::Directory => &[
            ("j/k", "select"),
            ("Enter", "write"),
            ("/", "filter"),
            ("Ctrl+B", "sidebar"),
            ("?", "help"),
            ("q", "quit"),
        ],
        FocusPane::Composer => &[
            ("Enter", "send"),
            ("Shift+Enter", "newline"),
            ("Esc", "chats"),
            ("Ctrl+B", "sidebar"),
        ],
    };

    let mut spans = vec![Span::styled(pane, styles.selected_entry), Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, styles.key_hint));
        spans.push(Span::styled(format!(" {label}  "), styles.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
