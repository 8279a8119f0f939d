use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::actions::Action;
use crate::infra::constants::SCROLL_ARROW_AMOUNT;
use crate::state::State;

/// Handle mouse events against the regions the renderer recorded last frame.
pub fn handle_mouse(event: &MouseEvent, state: &State) -> Action {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(event.column, event.row, state),
        MouseEventKind::ScrollUp => Action::ScrollUp(SCROLL_ARROW_AMOUNT),
        MouseEventKind::ScrollDown => Action::ScrollDown(SCROLL_ARROW_AMOUNT),
        _ => Action::None,
    }
}

fn handle_left_click(x: u16, y: u16, state: &State) -> Action {
    let pos = Position::new(x, y);
    let hits = &state.hits;

    if state.detail.is_some() {
        if contains(hits.close_button, pos) {
            return Action::CloseDetail;
        }
        if contains(hits.run_button, pos) {
            return Action::RunPrompt;
        }
        if contains(hits.clear_button, pos) {
            return Action::ClearPrompt;
        }
        for (i, rect) in hits.inputs.iter().enumerate() {
            if rect.contains(pos) {
                return Action::FocusInput(i);
            }
        }
        // A click on the overlay's background region dismisses it
        if contains(hits.overlay, pos) {
            return Action::None;
        }
        return Action::CloseDetail;
    }

    for (rect, view) in &hits.tabs {
        if rect.contains(pos) {
            return Action::SwitchView(*view);
        }
    }
    for (rect, label) in &hits.categories {
        if rect.contains(pos) {
            return Action::SelectCategory(label.clone());
        }
    }
    for (rect, index) in &hits.cards {
        if rect.contains(pos) {
            return Action::OpenCard(*index);
        }
    }
    Action::None
}

fn contains(rect: Option<Rect>, pos: Position) -> bool {
    rect.is_some_and(|r| r.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AssistantDetail, DetailState};
    use pd_catalog::{AssistantItem, Catalog, View};

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn card_click_opens_that_card() {
        let mut state = State::new(Catalog::default());
        state.hits.cards.push((Rect::new(0, 0, 10, 4), 0));
        state.hits.cards.push((Rect::new(10, 0, 10, 4), 1));

        assert_eq!(handle_mouse(&click(12, 1), &state), Action::OpenCard(1));
        assert_eq!(handle_mouse(&click(50, 20), &state), Action::None);
    }

    #[test]
    fn tab_and_category_clicks_dispatch() {
        let mut state = State::new(Catalog::default());
        state.hits.tabs.push((Rect::new(0, 0, 10, 1), View::Assistants));
        state.hits.categories.push((Rect::new(0, 2, 10, 1), "Writing".to_string()));

        assert_eq!(handle_mouse(&click(3, 0), &state), Action::SwitchView(View::Assistants));
        assert_eq!(handle_mouse(&click(3, 2), &state), Action::SelectCategory("Writing".to_string()));
    }

    #[test]
    fn click_outside_overlay_closes_it() {
        let mut state = State::new(Catalog::default());
        state.detail = Some(DetailState::Assistant(AssistantDetail::new(AssistantItem::default())));
        state.hits.overlay = Some(Rect::new(10, 5, 40, 20));

        assert_eq!(handle_mouse(&click(0, 0), &state), Action::CloseDetail);
        assert_eq!(handle_mouse(&click(15, 10), &state), Action::None);
    }
}
