use kinytimer_core::stats::format_duration;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles::{border_style, color_from_hex, dim_style, selected_style, title_style};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Projects ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for (index, project) in app.projects.iter().enumerate() {
        let marker = Span::styled("● ", Style::default().fg(color_from_hex(&project.color)));
        let name = if index == app.selected_index {
            Span::styled(format!(" {} ", project.name), selected_style())
        } else {
            Span::raw(project.name.clone())
        };
        let mut spans = vec![marker, name];
        if let Some(branch) = &project.branch {
            spans.push(Span::styled(format!(" ⎇ {branch}"), dim_style()));
        }
        lines.push(Line::from(spans));
    }

    // Per-project tracked time for the selection, computed from history.
    if let Some(project) = app.selected_project() {
        let total: u64 = app
            .engine
            .history()
            .iter()
            .filter(|s| s.project_id == project.id)
            .map(|s| s.duration_secs)
            .sum();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("tracked: {}", format_duration(total)),
            dim_style(),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
