//! Tests for the composer.

use super::*;
use crate::model::Message;

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn seeded_log() -> MessageLog {
    MessageLog::from_seed(
        (1..=5)
            .map(|i| Message::new(i, format!("seed {i}"), Side::Them, "14:20"))
            .collect(),
    )
}

// ===== Editing =====

#[test]
fn update_draft_replaces_verbatim() {
    let mut composer = Composer::new();
    composer.update_draft("  keep   spacing ");
    assert_eq!(composer.draft(), "  keep   spacing ");
    assert_eq!(composer.cursor(), 17);
}

#[test]
fn insert_char_handles_multibyte_text() {
    let mut composer = Composer::new();
    for ch in "Првет".chars() {
        composer.insert_char(ch);
    }
    composer.move_left();
    composer.move_left();
    composer.move_left();
    composer.insert_char('и');
    assert_eq!(composer.draft(), "Привет");
    assert_eq!(composer.cursor(), 3);
}

#[test]
fn backspace_at_start_is_noop() {
    let mut composer = Composer::new();
    composer.update_draft("ab");
    composer.move_home();
    composer.backspace();
    assert_eq!(composer.draft(), "ab");
    assert_eq!(composer.cursor(), 0);
}

#[test]
fn backspace_removes_char_before_cursor() {
    let mut composer = Composer::new();
    composer.update_draft("даа");
    composer.backspace();
    assert_eq!(composer.draft(), "да");
    assert_eq!(composer.cursor(), 2);
}

#[test]
fn delete_removes_char_under_cursor() {
    let mut composer = Composer::new();
    composer.update_draft("abc");
    composer.move_home();
    composer.delete();
    assert_eq!(composer.draft(), "bc");
    composer.move_end();
    composer.delete();
    assert_eq!(composer.draft(), "bc");
}

#[test]
fn cursor_movement_saturates() {
    let mut composer = Composer::new();
    composer.update_draft("ab");
    composer.move_right();
    assert_eq!(composer.cursor(), 2);
    composer.move_home();
    composer.move_left();
    assert_eq!(composer.cursor(), 0);
}

#[test]
fn insert_newline_adds_line_break() {
    let mut composer = Composer::new();
    composer.update_draft("line one");
    composer.insert_newline();
    composer.insert_char('2');
    assert_eq!(composer.draft(), "line one\n2");
}

// ===== Submit =====

#[test]
fn submit_appends_trimmed_message_and_clears_draft() {
    let mut log = seeded_log();
    let mut composer = Composer::new();
    composer.update_draft("Привет");

    let id = composer.submit(&mut log, at(9, 5));

    assert_eq!(log.len(), 6);
    let last = log.last().unwrap();
    assert_eq!(Some(last.id), id);
    assert_eq!(last.text, "Привет");
    assert_eq!(last.side, Side::Me);
    assert_eq!(last.timestamp, "09:05");
    assert_eq!(composer.draft(), "");
    assert_eq!(composer.cursor(), 0);
}

#[test]
fn submit_trims_surrounding_whitespace() {
    let mut log = MessageLog::new();
    let mut composer = Composer::new();
    composer.update_draft("  hi there \n");
    composer.submit(&mut log, at(23, 59));
    assert_eq!(log.last().unwrap().text, "hi there");
    assert_eq!(log.last().unwrap().timestamp, "23:59");
}

#[test]
fn whitespace_only_submit_is_noop_and_keeps_draft() {
    let mut log = seeded_log();
    let mut composer = Composer::new();
    composer.update_draft("   ");

    assert!(!composer.can_submit());
    assert_eq!(composer.submit(&mut log, at(12, 0)), None);
    assert_eq!(log.len(), 5);
    assert_eq!(composer.draft(), "   ");
}

#[test]
fn empty_submit_is_noop() {
    let mut log = seeded_log();
    let mut composer = Composer::new();
    assert_eq!(composer.submit(&mut log, at(12, 0)), None);
    assert_eq!(log.len(), 5);
}

#[test]
fn multiline_draft_keeps_inner_newlines() {
    let mut log = MessageLog::new();
    let mut composer = Composer::new();
    composer.update_draft("first\nsecond");
    composer.submit(&mut log, at(1, 2));
    assert_eq!(log.last().unwrap().text, "first\nsecond");
}

#[test]
fn consecutive_submits_get_increasing_ids() {
    let mut log = seeded_log();
    let mut composer = Composer::new();
    composer.update_draft("a");
    let first = composer.submit(&mut log, at(1, 0)).unwrap();
    composer.update_draft("b");
    let second = composer.submit(&mut log, at(1, 1)).unwrap();
    assert!(second > first);
    assert_eq!(first, MessageId::new(6));
}

#[test]
fn submit_into_exhausted_log_keeps_draft() {
    let mut log = MessageLog::from_seed(vec![Message::new(u64::MAX, "x", Side::Them, "")]);
    let mut composer = Composer::new();
    composer.update_draft("later");

    assert_eq!(composer.submit(&mut log, at(1, 0)), None);
    assert_eq!(composer.draft(), "later");
    assert_eq!(log.len(), 1);
}
