//! Statistics dashboard: stat cards, activity heatmap, project breakdown,
//! and recent sessions.

use chrono::Utc;
use kinytimer_core::stats::{self, format_duration, DayStats};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::{
    centered,
    styles::{border_style, color_from_hex, dim_style, heatmap_color, title_style},
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Min(6),
        ])
        .split(area);

    render_cards(f, app, rows[0]);
    render_heatmap(f, app, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    render_breakdown(f, app, cols[0]);
    render_recent(f, app, cols[1]);
}

fn render_cards(f: &mut Frame, app: &App, area: Rect) {
    let summary = stats::summary(app.engine.history(), Utc::now());
    let cards = [
        ("Today", format_duration(summary.today_secs), format!("{} sessions", summary.today_sessions)),
        ("This Week", format_duration(summary.week_secs), "7 days".to_string()),
        ("Total Time", format_duration(summary.total_secs), format!("{} sessions", summary.total_sessions)),
        ("Avg Session", format_duration(summary.avg_session_secs), "per session".to_string()),
    ];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (i, (title, value, detail)) in cards.into_iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(format!(" {title} "), title_style()));
        let inner = block.inner(cols[i]);
        f.render_widget(block, cols[i]);
        let lines = vec![
            Line::from(Span::raw(value)),
            Line::from(Span::styled(detail, dim_style())),
        ];
        f.render_widget(centered(lines), inner);
    }
}

fn render_heatmap(f: &mut Frame, app: &App, area: Rect) {
    let days = stats::heatmap(app.engine.history(), Utc::now().date_naive());
    let max = days.iter().map(|d| d.total_secs).max().unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Activity ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // 7 rows x 53 columns; each column is one consecutive 7-day chunk.
    let columns = days.len().div_ceil(7);
    let mut lines = Vec::with_capacity(7);
    for row in 0..7 {
        let mut spans = Vec::with_capacity(columns);
        for col in 0..columns {
            let index = col * 7 + row;
            let span = match days.get(index) {
                Some(day) => Span::styled("■", Style::default().fg(heatmap_color(intensity(day, max)))),
                None => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Intensity level 0..=4 relative to the busiest day.
fn intensity(day: &DayStats, max: u64) -> u8 {
    if day.total_secs == 0 || max == 0 {
        return 0;
    }
    ((day.total_secs * 4).div_ceil(max) as u8).min(4)
}

fn render_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let breakdown = stats::project_breakdown(&app.projects, app.engine.history());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Projects ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for project in &breakdown {
        let bar_len = (project.percentage / 5.0).round() as usize;
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color_from_hex(&project.color))),
            Span::raw(format!("{}  {}", project.name, format_duration(project.total_secs))),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", "█".repeat(bar_len)),
                Style::default().fg(color_from_hex(&project.color)),
            ),
            Span::styled(
                format!(" {:.0}% · {} sessions", project.percentage, project.sessions),
                dim_style(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_recent(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Recent Sessions ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for session in app.engine.history().iter().rev().take(10) {
        let (name, color) = app
            .projects
            .iter()
            .find(|p| p.id == session.project_id)
            .map(|p| (p.name.as_str(), color_from_hex(&p.color)))
            .unwrap_or(("Unknown Project", ratatui::style::Color::Gray));
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::raw(format!(
                "{name}  {}  {}",
                session.started_at.format("%Y-%m-%d %H:%M"),
                format_duration(session.duration_secs)
            )),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled("no sessions yet", dim_style())));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
