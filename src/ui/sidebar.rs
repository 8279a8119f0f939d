use ratatui::{prelude::*, widgets::Paragraph};

use crate::infra::config;
use crate::state::State;
use super::{helpers::truncate_string, theme};

/// Render the category navigation list. Labels come from the UI config, not
/// from the loaded data; the active label is highlighted.
pub fn render_sidebar(frame: &mut Frame, state: &mut State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("  ", base_style),
            Span::styled("CATEGORIES", Style::default().fg(theme::TEXT_MUTED).bold()),
        ]),
        Line::from(""),
    ];

    let label_width = area.width.saturating_sub(4) as usize;
    for (i, label) in config::category_labels().iter().enumerate() {
        let row = area.y + 2 + i as u16;
        if row >= area.y + area.height {
            break;
        }

        let active = *label == state.active_category;
        let (marker, style) = if active {
            ("▸ ", Style::default().fg(theme::ACCENT).bold())
        } else {
            ("  ", Style::default().fg(theme::TEXT_SECONDARY))
        };
        lines.push(Line::from(vec![
            Span::styled(" ", base_style),
            Span::styled(marker, Style::default().fg(theme::ACCENT)),
            Span::styled(truncate_string(label, label_width), style),
        ]));

        state.hits.categories.push((Rect::new(area.x, row, area.width, 1), label.clone()));
    }

    frame.render_widget(Paragraph::new(lines).style(base_style), area);
}
