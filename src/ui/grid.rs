use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::infra::constants::{CARD_HEIGHT, CARD_WIDTH};
use crate::state::State;
use super::{helpers::truncate_string, theme};

/// Rebuild the card grid for the active view's filtered sequence. Card `i`
/// always maps to filtered item `i`, for both keyboard selection and mouse
/// hit-testing.
pub fn render_grid(frame: &mut Frame, state: &mut State, area: Rect) {
    // Own the summaries so recording hit regions below can borrow state again.
    let cards: Vec<(String, String)> =
        state.visible_cards().into_iter().map(|(t, c)| (t.to_string(), c.to_string())).collect();

    if cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No items in this category",
            Style::default().fg(theme::TEXT_MUTED).italic(),
        )))
        .style(Style::default().bg(theme::BG_BASE));
        frame.render_widget(empty, area);
        return;
    }

    let cols = (area.width / CARD_WIDTH).max(1) as usize;
    state.hits.grid_cols = cols;

    for (i, (title, category)) in cards.iter().enumerate() {
        let col = (i % cols) as u16;
        let row = (i / cols) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break; // grid is small and static; no pagination
        }
        let rect = Rect::new(area.x + col * CARD_WIDTH, y, CARD_WIDTH, CARD_HEIGHT);

        render_card(frame, rect, title, category, i == state.selected_card);
        state.hits.cards.push((rect, i));
    }
}

fn render_card(frame: &mut Frame, rect: Rect, title: &str, category: &str, selected: bool) {
    let border_style = if selected {
        Style::default().fg(theme::BORDER_FOCUS)
    } else {
        Style::default().fg(theme::BORDER)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(theme::BG_SURFACE));

    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let width = inner.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate_string(title, width),
            Style::default().fg(theme::TEXT).bold(),
        )),
        Line::from(Span::styled(
            truncate_string(category, width),
            Style::default().fg(theme::TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
