use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AssistantDetail, DetailState, HitMap, PromptDetail, State};
use super::{
    helpers::{centered_rect, truncate_string, wrap_text},
    theme,
};

/// Render the detail overlay for the open item on top of the grid. Records
/// the overlay region and its controls for mouse hit-testing; a click
/// anywhere outside the recorded overlay closes it.
pub fn render_detail(frame: &mut Frame, state: &mut State, area: Rect) {
    // Disjoint borrows: the overlay reads `detail` while recording into `hits`.
    let State { detail, hits, .. } = state;
    let Some(detail) = detail else { return };

    let overlay = centered_rect(area, area.width * 4 / 5, area.height * 4 / 5);
    hits.overlay = Some(overlay);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_FOCUS))
        .style(Style::default().bg(theme::BG_SURFACE))
        .title(Span::styled(format!(" {} ", detail.title()), Style::default().fg(theme::ACCENT).bold()))
        .title_alignment(Alignment::Left);

    let content = block.inner(overlay);
    frame.render_widget(block, overlay);

    // Close control in the top border, right-aligned
    if overlay.width > 6 {
        let close = Rect::new(overlay.x + overlay.width - 5, overlay.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("[x]", Style::default().fg(theme::TEXT_MUTED))),
            close,
        );
        hits.close_button = Some(close);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(content);

    match detail {
        DetailState::Prompt(d) => {
            render_prompt_form(frame, hits, d, columns[0]);
            render_prompt_panes(frame, d, columns[1]);
        }
        DetailState::Assistant(d) => {
            render_assistant_info(frame, d, columns[0]);
            render_conversation(frame, d, columns[1]);
        }
    }
}

/// Left column of a prompt detail: description, one labeled input per
/// distinct placeholder, and the Run/Clear controls.
fn render_prompt_form(frame: &mut Frame, hits: &mut HitMap, d: &PromptDetail, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for text in wrap_text(&d.item.description, width) {
        lines.push(Line::from(Span::styled(format!(" {}", text), Style::default().fg(theme::TEXT_SECONDARY))));
    }
    lines.push(Line::from(""));

    for (i, placeholder) in d.placeholders.iter().enumerate() {
        let focused = i == d.focused;
        let label_style = if focused {
            Style::default().fg(theme::ACCENT).bold()
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };
        lines.push(Line::from(Span::styled(format!(" {}:", placeholder.key), label_style)));

        let value = &d.values[i];
        let shown = if focused { format!("{}▏", value) } else { value.clone() };
        let input_row = area.y + lines.len() as u16;
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                format!("{:<w$}", truncate_string(&shown, width.saturating_sub(1)), w = width.saturating_sub(1)),
                Style::default().fg(theme::TEXT).bg(theme::BG_INPUT),
            ),
        ]));
        if input_row < area.y + area.height {
            hits.inputs.push(Rect::new(area.x, input_row, area.width, 1));
        }
        lines.push(Line::from(""));
    }

    // Run/Clear controls, recorded by span offset within the line
    let buttons_row = area.y + lines.len() as u16;
    let run_label = "[ Run Prompt ]";
    let clear_label = "[ Clear ]";
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(run_label, Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold()),
        Span::styled("  ", Style::default()),
        Span::styled(clear_label, Style::default().fg(theme::TEXT).bg(theme::BG_ELEVATED)),
    ]));
    if buttons_row < area.y + area.height {
        let run_x = area.x + 1;
        let clear_x = run_x + run_label.len() as u16 + 2;
        hits.run_button = Some(Rect::new(run_x, buttons_row, run_label.len() as u16, 1));
        hits.clear_button = Some(Rect::new(clear_x, buttons_row, clear_label.len() as u16, 1));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Right column of a prompt detail: the (possibly substituted) prompt text
/// above the static sample output, both read-only.
fn render_prompt_panes(frame: &mut Frame, d: &PromptDetail, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_text_pane(frame, " Prompt ", &d.rendered, rows[0]);
    render_text_pane(frame, " Sample output ", &d.item.output, rows[1]);
}

fn render_text_pane(frame: &mut Frame, title: &str, text: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .title(Span::styled(title.to_string(), Style::default().fg(theme::TEXT_MUTED)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(theme::TEXT))
            .wrap(Wrap { trim: false }),
        inner,
    );
}

/// Left column of an assistant detail: description and the call-to-action
/// link for the configured URL.
fn render_assistant_info(frame: &mut Frame, d: &AssistantDetail, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for text in wrap_text(&d.item.description, width) {
        lines.push(Line::from(Span::styled(format!(" {}", text), Style::default().fg(theme::TEXT_SECONDARY))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ↗ Use this GPT",
        Style::default().fg(theme::ACCENT).bold().underlined(),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", truncate_string(&d.item.cta_link, width)),
        Style::default().fg(theme::TEXT_MUTED),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Right column of an assistant detail: the parsed transcript as
/// speaker-tagged bubbles with single-character avatars.
fn render_conversation(frame: &mut Frame, d: &AssistantDetail, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .title(Span::styled(" Conversation ", Style::default().fg(theme::TEXT_MUTED)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &d.messages {
        let color = match message.speaker {
            pd_catalog::transcript::Speaker::User => theme::USER,
            pd_catalog::transcript::Speaker::Gpt => theme::GPT,
        };
        for (i, text) in message.lines.iter().enumerate() {
            let avatar = if i == 0 { message.speaker.avatar().to_string() } else { " ".to_string() };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", avatar), Style::default().fg(theme::BG_BASE).bg(color).bold()),
                Span::styled(" ", Style::default()),
                Span::styled(text.clone(), Style::default().fg(theme::TEXT)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).scroll((d.scroll as u16, 0)).wrap(Wrap { trim: false }),
        inner,
    );
}
