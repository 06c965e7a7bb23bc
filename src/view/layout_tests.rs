//! Tests for shell layout and hit testing.

use super::*;
use crate::model::ConversationId;
use crate::source;
use crate::state::{AppState, ThreadMode};
use crate::view::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn sample_state() -> AppState {
    AppState::new(
        source::sample_directory(),
        source::sample_messages(),
        ThreadMode::Shared,
    )
}

fn screen() -> Rect {
    Rect::new(0, 0, 100, 30)
}

fn id(raw: u32) -> ConversationId {
    ConversationId::new(raw)
}

fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let styles = ChatStyles::with_color_config(ColorConfig::from_env_and_args(true));
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let areas = compute_areas(frame.area(), state);
            render_layout(frame, state, &areas, &styles);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== compute_areas =====

#[test]
fn expanded_layout_has_rail_directory_and_thread() {
    let areas = compute_areas(screen(), &sample_state());

    assert_eq!(areas.rail, Rect::new(0, 0, 4, 29));
    assert_eq!(areas.directory, Some(Rect::new(4, 0, 34, 29)));
    assert_eq!(areas.thread, Rect::new(38, 0, 62, 29));
    assert_eq!(areas.status, Rect::new(0, 29, 100, 1));
}

#[test]
fn expanded_layout_lists_every_sample_entry() {
    let areas = compute_areas(screen(), &sample_state());

    let ids: Vec<ConversationId> = areas.entries.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![id(1), id(2), id(3), id(4), id(5)]);
    assert_eq!(areas.entries[0].1, Rect::new(4, 4, 33, 2));
    assert_eq!(areas.entries[1].1, Rect::new(4, 7, 33, 2));
}

#[test]
fn collapsed_layout_keeps_only_the_toggle() {
    let mut state = sample_state();
    state.toggle_sidebar();

    let areas = compute_areas(screen(), &state);

    assert_eq!(areas.directory, None);
    assert_eq!(areas.filter_box, None);
    assert_eq!(areas.rail_search, None);
    assert!(areas.entries.is_empty());
    assert_eq!(areas.toggle, Rect::new(0, 0, 3, 1));
    assert_eq!(areas.thread, Rect::new(4, 0, 96, 29));
}

#[test]
fn composer_row_sits_at_bottom_of_thread() {
    let areas = compute_areas(screen(), &sample_state());

    assert_eq!(areas.header, Some(Rect::new(38, 0, 62, 3)));
    assert_eq!(areas.attach, Some(Rect::new(38, 26, 3, 3)));
    assert_eq!(areas.composer_input, Some(Rect::new(41, 26, 54, 3)));
    assert_eq!(areas.send_button, Some(Rect::new(95, 26, 5, 3)));
    assert_eq!(areas.messages, Some(Rect::new(38, 3, 62, 23)));
}

#[test]
fn narrow_terminal_shrinks_directory_for_thread() {
    let areas = compute_areas(Rect::new(0, 0, 40, 20), &sample_state());
    assert_eq!(areas.directory.map(|r| r.width), Some(12));
    assert_eq!(areas.thread.width, 24);

    let tiny = compute_areas(Rect::new(0, 0, 20, 10), &sample_state());
    assert_eq!(tiny.directory, None);
}

#[test]
fn entries_scroll_to_keep_selection_visible() {
    let mut state = sample_state();
    state.select(id(5));

    let areas = compute_areas(Rect::new(0, 0, 100, 12), &state);

    let ids: Vec<ConversationId> = areas.entries.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![id(4), id(5)]);
}

#[test]
fn entries_follow_filter() {
    let mut state = sample_state();
    state.filter = crate::state::DirectoryFilter::Applied {
        query: "клуб".to_string(),
    };

    let areas = compute_areas(screen(), &state);

    let ids: Vec<ConversationId> = areas.entries.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![id(3)]);
}

#[test]
fn composer_height_grows_with_draft_lines() {
    assert_eq!(composer_height(""), 3);
    assert_eq!(composer_height("one"), 3);
    assert_eq!(composer_height("one\ntwo"), 4);
    assert_eq!(composer_height("1\n2\n3\n4\n5\n6"), 2 + COMPOSER_MAX_LINES);
}

#[test]
fn is_over_messages_checks_thread_list() {
    let areas = compute_areas(screen(), &sample_state());
    assert!(areas.is_over_messages(50, 10));
    assert!(!areas.is_over_messages(10, 10));
    assert!(!areas.is_over_messages(50, 27));
}

// ===== hit_test =====

#[test]
fn hit_test_resolves_controls() {
    let areas = compute_areas(screen(), &sample_state());

    assert_eq!(hit_test(&areas, 1, 0), Some(ClickTarget::SidebarToggle));
    assert_eq!(hit_test(&areas, 1, 4), Some(ClickTarget::FilterBox));
    assert_eq!(hit_test(&areas, 10, 2), Some(ClickTarget::FilterBox));
    assert_eq!(hit_test(&areas, 10, 10), Some(ClickTarget::Conversation(id(3))));
    assert_eq!(hit_test(&areas, 97, 27), Some(ClickTarget::SendButton));
    assert_eq!(hit_test(&areas, 60, 27), Some(ClickTarget::ComposerInput));
}

#[test]
fn hit_test_gap_between_entries_is_empty() {
    let areas = compute_areas(screen(), &sample_state());
    assert_eq!(hit_test(&areas, 10, 6), None);
    assert_eq!(hit_test(&areas, 60, 10), None);
}

#[test]
fn hit_test_collapsed_toggle_still_works() {
    let mut state = sample_state();
    state.toggle_sidebar();
    let areas = compute_areas(screen(), &state);

    assert_eq!(hit_test(&areas, 0, 0), Some(ClickTarget::SidebarToggle));
    assert_eq!(hit_test(&areas, 1, 4), None);
}

// ===== render_layout =====

#[test]
fn renders_full_shell() {
    let screen = render_to_string(&sample_state(), 100, 30);

    assert!(screen.contains(crate::view::rail::TOGGLE_GLYPH));
    assert!(screen.contains(directory::DIRECTORY_TITLE));
    assert!(screen.contains("Согласен!"));
    assert!(screen.contains(composer::COMPOSER_PLACEHOLDER));
    assert!(screen.contains("MESSAGE"));
}

#[test]
fn renders_placeholder_without_selection() {
    let empty = crate::state::ChatDirectory::new(Vec::new()).unwrap();
    let state = AppState::new(empty, Vec::new(), ThreadMode::Shared);

    let screen = render_to_string(&state, 100, 30);

    assert!(screen.contains(thread::EMPTY_SELECTION_HINT));
    assert!(screen.contains(directory::NO_CONVERSATIONS));
}

#[test]
fn renders_help_overlay_on_top() {
    let mut state = sample_state();
    state.help_visible = true;

    let screen = render_to_string(&state, 100, 30);

    assert!(screen.contains("Keyboard Shortcuts"));
}

#[test]
fn collapsed_shell_snapshot() {
    let mut state = sample_state();
    state.toggle_sidebar();
    state.focus_directory();

    let screen = render_to_string(&state, 60, 16);

    assert!(!screen.contains(directory::DIRECTORY_TITLE));
    assert!(screen.contains("Любители космоса"));
    assert!(screen.contains("CHATS"));
}
