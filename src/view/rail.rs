//! Navigation rail.
//!
//! The menu glyph toggles the directory panel and stays visible in both
//! layouts. The section glyphs below it only show while expanded.

use crate::state::{AppState, FocusPane};
use crate::view::layout::ShellAreas;
use crate::view::ChatStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Menu button that collapses and expands the sidebar.
pub const TOGGLE_GLYPH: &str = "≡";
const CHATS_GLYPH: &str = "✉";
const SEARCH_GLYPH: &str = "⌕";
const CONTACTS_GLYPH: &str = "☺";
const SETTINGS_GLYPH: &str = "⚙";

/// Draw the icon rail. Collapsed, only the toggle remains.
pub fn render_rail(frame: &mut Frame, areas: &ShellAreas, state: &AppState, styles: &ChatStyles) {
    let area = areas.rail;
    frame.render_widget(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles.border),
        area,
    );

    let glyph = |rect: Rect, text: &'static str, style: Style| {
        (
            rect,
            Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center),
        )
    };

    let mut items = vec![glyph(areas.toggle, TOGGLE_GLYPH, styles.rail_icon)];

    if state.layout.is_expanded() {
        let width = areas.toggle.width;
        let row = |offset: u16| Rect::new(area.x, area.y + offset, width, 1);
        let chats_style = if state.focus == FocusPane::Directory {
            styles.rail_active
        } else {
            styles.rail_icon
        };

        if area.height > 2 {
            items.push(glyph(row(2), CHATS_GLYPH, chats_style));
        }
        if let Some(search) = areas.rail_search {
            let style = if state.filter.is_editing() {
                styles.rail_active
            } else {
                styles.rail_icon
            };
            items.push(glyph(search, SEARCH_GLYPH, style));
        }
        if area.height > 8 {
            items.push(glyph(row(6), CONTACTS_GLYPH, styles.rail_icon));
            items.push(glyph(row(area.height - 1), SETTINGS_GLYPH, styles.rail_icon));
        }
    }

    for (rect, paragraph) in items {
        frame.render_widget(paragraph, rect);
    }
}
