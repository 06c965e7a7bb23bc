//! Built-in sample conversations and messages.

use crate::model::{Conversation, Message, Side};
use crate::state::ChatDirectory;

/// Sample conversations in display order.
pub fn sample_conversations() -> Vec<Conversation> {
    vec![
        Conversation::group(1, "Любители космоса")
            .with_preview("Кто-нибудь смотрел запуск вчера?", "14:32")
            .with_unread(3)
            .with_members(12),
        Conversation::direct(2, "Алексей Иванов")
            .with_preview("Отлично, увидимся завтра!", "13:15"),
        Conversation::group(3, "Книжный клуб")
            .with_preview("Следующая встреча в пятницу", "11:20")
            .with_unread(1)
            .with_members(12),
        Conversation::direct(4, "Мария Петрова").with_preview("Спасибо за помощь!", "Вчера"),
        Conversation::group(5, "Фотография и путешествия")
            .with_preview("Потрясающие снимки из Норвегии", "Вчера")
            .with_unread(5)
            .with_members(12),
    ]
}

/// Sample directory. Ids are fixed and distinct.
pub fn sample_directory() -> ChatDirectory {
    ChatDirectory::new(sample_conversations())
        .unwrap_or_else(|err| unreachable!("built-in sample data is valid: {err}"))
}

/// Sample thread shown for the open conversation.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(1, "Привет! Как дела?", Side::Them, "14:20"),
        Message::new(2, "Отлично! А у тебя?", Side::Me, "14:22"),
        Message::new(
            3,
            "Тоже хорошо, спасибо! Смотрел запуск вчера?",
            Side::Them,
            "14:25",
        ),
        Message::new(
            4,
            "Да, было невероятно! Особенно момент посадки первой ступени",
            Side::Me,
            "14:27",
        ),
        Message::new(5, "Согласен! Каждый раз восхищаюсь точностью", Side::Them, "14:32"),
    ]
}
