use ratatui::{prelude::*, widgets::Paragraph};

use pd_catalog::View;

use crate::infra::config;
use crate::state::State;
use super::theme;

/// Render the two tab links and record their regions for mouse hit-testing.
pub fn render_tabs(frame: &mut Frame, state: &mut State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE);
    let mut spans = vec![Span::styled(" ", base_style)];
    let mut x = area.x + 1;

    for view in [View::Prompts, View::Assistants] {
        let title = config::tab_title(view);
        let label = format!(" {} ", title);
        let width = label.chars().count() as u16;

        let style = if view == state.view {
            Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold()
        } else {
            Style::default().fg(theme::TEXT_SECONDARY).bg(theme::BG_ELEVATED)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", base_style));

        state.hits.tabs.push((Rect::new(x, area.y, width, 1), view));
        x += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base_style), area);
}
