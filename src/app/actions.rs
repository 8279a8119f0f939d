use pd_catalog::View;

use crate::infra::config;
use crate::state::{DetailState, State};

/// Everything the event handlers can ask the app to do. Applying any action
/// marks the UI dirty; the grid and overlay are rebuilt in full on the next
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Force a redraw (terminal resize).
    Redraw,
    SwitchView(View),
    SelectCategory(String),
    NextCategory,
    PrevCategory,
    /// Move the card selection by (columns, rows) within the grid.
    MoveSelection(i32, i32),
    /// Select card `index` of the filtered sequence and open its detail.
    OpenCard(usize),
    /// Open the detail of the currently selected card.
    OpenSelected,
    CloseDetail,
    /// Prompt detail: input field editing.
    FocusInput(usize),
    FocusNextInput,
    FocusPrevInput,
    InputChar(char),
    InputBackspace,
    InputPaste(String),
    RunPrompt,
    ClearPrompt,
    /// Assistant detail: conversation scrolling.
    ScrollUp(usize),
    ScrollDown(usize),
}

pub fn apply_action(state: &mut State, action: Action) {
    match action {
        Action::None | Action::Redraw => {}
        Action::SwitchView(view) => state.switch_view(view),
        Action::SelectCategory(label) => state.select_category(&label),
        Action::NextCategory => cycle_category(state, 1),
        Action::PrevCategory => cycle_category(state, -1),
        Action::MoveSelection(dx, dy) => move_selection(state, dx, dy),
        Action::OpenCard(index) => state.open_detail(index),
        Action::OpenSelected => state.open_detail(state.selected_card),
        Action::CloseDetail => state.detail = None,
        Action::FocusInput(index) => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail
                && index < d.placeholders.len()
            {
                d.focused = index;
            }
        }
        Action::FocusNextInput => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail {
                d.focus_next();
            }
        }
        Action::FocusPrevInput => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail {
                d.focus_prev();
            }
        }
        Action::InputChar(c) => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail
                && let Some(value) = d.values.get_mut(d.focused)
            {
                value.push(c);
            }
        }
        Action::InputBackspace => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail
                && let Some(value) = d.values.get_mut(d.focused)
            {
                value.pop();
            }
        }
        Action::InputPaste(text) => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail
                && let Some(value) = d.values.get_mut(d.focused)
            {
                // Input fields are single-line; fold pasted newlines to spaces
                value.push_str(&text.replace('\n', " "));
            }
        }
        Action::RunPrompt => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail {
                d.run();
            }
        }
        Action::ClearPrompt => {
            if let Some(DetailState::Prompt(d)) = &mut state.detail {
                d.clear();
            }
        }
        Action::ScrollUp(amount) => {
            if let Some(DetailState::Assistant(d)) = &mut state.detail {
                d.scroll = d.scroll.saturating_sub(amount);
            }
        }
        Action::ScrollDown(amount) => {
            if let Some(DetailState::Assistant(d)) = &mut state.detail {
                let max = d.total_lines().saturating_sub(1);
                d.scroll = (d.scroll + amount).min(max);
            }
        }
    }
    state.dirty = true;
}

/// Step through the configured category labels, wrapping at both ends.
fn cycle_category(state: &mut State, step: i32) {
    let labels = config::category_labels();
    if labels.is_empty() {
        return;
    }
    let current = labels.iter().position(|l| *l == state.active_category).unwrap_or(0) as i32;
    let len = labels.len() as i32;
    let next = (current + step).rem_euclid(len) as usize;
    let label = labels[next].clone();
    state.select_category(&label);
}

/// Move the card selection within the grid. Horizontal steps move by one
/// card, vertical steps by one row (the renderer records the column count).
fn move_selection(state: &mut State, dx: i32, dy: i32) {
    let len = state.visible_len();
    if len == 0 {
        return;
    }
    let cols = state.hits.grid_cols.max(1) as i32;
    let delta = dx + dy * cols;
    let next = (state.selected_card as i32 + delta).clamp(0, len as i32 - 1);
    state.selected_card = next as usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_catalog::{ALL_CATEGORIES, Catalog, PromptItem};

    fn state_with_prompts(n: usize) -> State {
        let prompts = (0..n)
            .map(|i| PromptItem {
                title: format!("p{}", i),
                category: "Writing".to_string(),
                ..Default::default()
            })
            .collect();
        State::new(Catalog { prompts, assistants: vec![] })
    }

    #[test]
    fn switch_view_action_resets_category() {
        let mut state = state_with_prompts(2);
        state.select_category("Writing");
        apply_action(&mut state, Action::SwitchView(View::Assistants));
        assert_eq!(state.active_category, ALL_CATEGORIES);
        assert!(state.dirty);
    }

    #[test]
    fn selection_clamps_at_grid_edges() {
        let mut state = state_with_prompts(3);
        state.hits.grid_cols = 2;

        apply_action(&mut state, Action::MoveSelection(-1, 0));
        assert_eq!(state.selected_card, 0);

        apply_action(&mut state, Action::MoveSelection(0, 1));
        assert_eq!(state.selected_card, 2);

        apply_action(&mut state, Action::MoveSelection(0, 1));
        assert_eq!(state.selected_card, 2);
    }

    #[test]
    fn open_selected_opens_detail_for_selected_card() {
        let mut state = state_with_prompts(3);
        apply_action(&mut state, Action::MoveSelection(1, 0));
        apply_action(&mut state, Action::OpenSelected);
        match state.detail {
            Some(DetailState::Prompt(ref d)) => assert_eq!(d.item.title, "p1"),
            _ => panic!("expected prompt detail"),
        }

        apply_action(&mut state, Action::CloseDetail);
        assert!(state.detail.is_none());
    }

    #[test]
    fn typing_edits_the_focused_input() {
        let mut state = State::new(Catalog {
            prompts: vec![PromptItem { prompt: "[[A]] [[B]]".to_string(), ..Default::default() }],
            assistants: vec![],
        });
        apply_action(&mut state, Action::OpenSelected);
        apply_action(&mut state, Action::InputChar('h'));
        apply_action(&mut state, Action::FocusNextInput);
        apply_action(&mut state, Action::InputChar('i'));
        apply_action(&mut state, Action::InputBackspace);
        apply_action(&mut state, Action::InputPaste("a\nb".to_string()));

        match state.detail {
            Some(DetailState::Prompt(ref d)) => {
                assert_eq!(d.values[0], "h");
                assert_eq!(d.values[1], "a b");
            }
            _ => panic!("expected prompt detail"),
        }
    }
}
