use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::actions::Action;
use crate::app::mouse::handle_mouse;
use crate::infra::constants::{SCROLL_ARROW_AMOUNT, SCROLL_PAGE_AMOUNT};
use crate::state::{DetailState, State};

/// Translate a terminal event into an action. `None` means quit.
pub fn handle_event(event: &Event, state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(key, state),
        Event::Mouse(mouse) => Some(handle_mouse(mouse, state)),
        // Bracketed paste goes to the focused detail input.
        // Normalize line endings: terminals may send \r\n or \r instead of \n
        Event::Paste(text) => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            Some(Action::InputPaste(normalized))
        }
        Event::Resize(_, _) => Some(Action::Redraw),
        _ => Some(Action::None),
    }
}

fn handle_key(key: &KeyEvent, state: &State) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global Ctrl shortcuts (always handled first)
    if ctrl {
        match key.code {
            KeyCode::Char('q') => return None, // Quit
            KeyCode::Char('l') => return Some(Action::ClearPrompt),
            _ => return Some(Action::None),
        }
    }

    // The open overlay captures all remaining keys
    match &state.detail {
        Some(DetailState::Prompt(_)) => Some(handle_prompt_detail_key(key)),
        Some(DetailState::Assistant(_)) => Some(handle_assistant_detail_key(key)),
        None => handle_browse_key(key, state),
    }
}

/// Keys while browsing the grids (no overlay open)
fn handle_browse_key(key: &KeyEvent, state: &State) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => return None,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchView(state.view.other()),
        KeyCode::Char('1') => Action::SwitchView(pd_catalog::View::Prompts),
        KeyCode::Char('2') => Action::SwitchView(pd_catalog::View::Assistants),
        KeyCode::Char('c') => Action::NextCategory,
        KeyCode::Char('C') => Action::PrevCategory,
        KeyCode::Left => Action::MoveSelection(-1, 0),
        KeyCode::Right => Action::MoveSelection(1, 0),
        KeyCode::Up => Action::MoveSelection(0, -1),
        KeyCode::Down => Action::MoveSelection(0, 1),
        KeyCode::Enter => Action::OpenSelected,
        _ => Action::None,
    };
    Some(action)
}

/// Keys while a prompt detail is open. Printable characters go to the focused
/// variable input, so closing is Esc (not `q`).
fn handle_prompt_detail_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CloseDetail,
        KeyCode::Enter => Action::RunPrompt,
        KeyCode::Tab | KeyCode::Down => Action::FocusNextInput,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrevInput,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Keys while an assistant detail is open
fn handle_assistant_detail_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::CloseDetail,
        KeyCode::Up => Action::ScrollUp(SCROLL_ARROW_AMOUNT),
        KeyCode::Down => Action::ScrollDown(SCROLL_ARROW_AMOUNT),
        KeyCode::PageUp => Action::ScrollUp(SCROLL_PAGE_AMOUNT),
        KeyCode::PageDown => Action::ScrollDown(SCROLL_PAGE_AMOUNT),
        _ => Action::None,
    }
}
