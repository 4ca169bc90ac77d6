use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::{
    modal_area,
    styles::{color_from_hex, hint_style, modal_bg_style, modal_title_style, selected_style, PALETTE},
};

/// Render the add-project form overlay.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let overlay = modal_area(area, 66, 12);
    f.render_widget(Clear, overlay);

    let field = |label: &str, value: &str, index: usize| -> Line<'static> {
        let text = format!(" {label:<12}{value}");
        if form.editing_field == index {
            Line::from(vec![
                Span::styled(text, selected_style()),
                Span::styled("▏", selected_style()),
            ])
        } else {
            Line::raw(text)
        }
    };

    let mut lines = vec![Line::raw("")];
    lines.push(field("Name", &form.name, 0));
    lines.push(field("Repository", &form.repo, 1));
    lines.push(field("Branch", &form.branch, 2));
    lines.push(Line::raw(""));

    // Color swatches; the chosen one is bracketed.
    let mut swatches = vec![Span::raw(" Color       ")];
    for (i, hex) in PALETTE.iter().enumerate() {
        if i == form.color_index {
            swatches.push(Span::styled("[■]", Style::default().fg(color_from_hex(hex))));
        } else {
            swatches.push(Span::styled(" ■ ", Style::default().fg(color_from_hex(hex))));
        }
    }
    lines.push(Line::from(swatches));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " Tab next field · ←/→ color · Enter add · Esc cancel",
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" New Project ", modal_title_style()))
            .style(modal_bg_style()),
    );
    f.render_widget(paragraph, overlay);
}
