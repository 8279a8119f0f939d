mod detail;
mod grid;
mod helpers;
mod sidebar;
mod status;
mod tabs;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::infra::constants::{SIDEBAR_WIDTH, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::state::State;

/// Rebuild the whole frame from state. No diffing: the dataset is small and
/// static, so every render replaces prior content. Hit regions for the mouse
/// handler are recorded as a side effect.
pub fn render(frame: &mut Frame, state: &mut State) {
    state.hits.clear();
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    tabs::render_tabs(frame, state, main_layout[0]);
    render_body(frame, state, main_layout[1]);
    status::render_status_bar(frame, state, main_layout[2]);

    // The detail overlay draws on top of everything else
    if state.detail.is_some() {
        detail::render_detail(frame, state, area);
    }
}

fn render_body(frame: &mut Frame, state: &mut State, area: Rect) {
    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);

    sidebar::render_sidebar(frame, state, body_layout[0]);
    grid::render_grid(frame, state, body_layout[1]);
}
