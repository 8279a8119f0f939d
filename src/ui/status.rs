use ratatui::{prelude::*, widgets::Paragraph};

use crate::infra::config;
use crate::state::{DetailState, State};
use super::theme;

/// One-line status bar: active view/category badges, item count, key hints.
pub fn render_status_bar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);

    let mut spans = vec![
        Span::styled(" ", base_style),
        Span::styled(
            format!(" {} ", config::tab_title(state.view).to_uppercase()),
            Style::default().fg(theme::BG_BASE).bg(theme::ACCENT_DIM).bold(),
        ),
        Span::styled(" ", base_style),
        Span::styled(
            format!(" {} ", state.active_category),
            Style::default().fg(theme::TEXT).bg(theme::BG_ELEVATED),
        ),
        Span::styled(" ", base_style),
        Span::styled(format!("{} items", state.visible_len()), base_style),
    ];

    let hints = match &state.detail {
        None => "  tab switch · c category · ↑↓←→ select · ↵ open · q quit",
        Some(DetailState::Prompt(_)) => "  tab next field · ↵ run · ctrl+l clear · esc close",
        Some(DetailState::Assistant(_)) => "  ↑↓ scroll · esc close",
    };
    spans.push(Span::styled(hints, base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base_style), area);
}
