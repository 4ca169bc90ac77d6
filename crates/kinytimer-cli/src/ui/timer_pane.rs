use kinytimer_core::stats::format_duration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::app::App;
use crate::ui::{
    centered,
    styles::{
        border_style, color_from_hex, countdown_style, dim_style, gauge_style, idle_style,
        paused_style, running_style, title_style,
    },
    vertical_pad,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let state = app.engine.state();

    let (status_text, status_style) = if state.is_running && state.is_paused {
        ("PAUSED", paused_style())
    } else if state.is_running {
        ("RUNNING", running_style())
    } else {
        ("READY", idle_style())
    };

    let mut lines = vertical_pad(rows[0].height, 7);
    lines.push(Line::from(Span::styled(
        format!("{}  ·  cycle {}", state.mode.label(), state.cycle),
        dim_style(),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format_duration(state.remaining_secs as u64),
        countdown_style(),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(status_text, status_style)));
    lines.push(Line::raw(""));
    match app.selected_project() {
        Some(project) => {
            let mut spans = vec![
                Span::styled("● ", ratatui::style::Style::default().fg(color_from_hex(&project.color))),
                Span::raw(project.name.clone()),
            ];
            if let (Some(repo), Some(branch)) = (&project.repo, &project.branch) {
                spans.push(Span::styled(format!("  {repo} ⎇ {branch}"), dim_style()));
            }
            lines.push(Line::from(spans));
        }
        None => lines.push(Line::from(Span::styled("no project selected", dim_style()))),
    }

    f.render_widget(centered(lines), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(app.engine.phase_progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, rows[1]);
}
