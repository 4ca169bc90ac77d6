pub mod dashboard_pane;
pub mod help;
pub mod project_form;
pub mod project_pane;
pub mod styles;
pub mod timer_pane;
pub mod zen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use self::styles::{hint_style, status_style, title_style};

/// Main render function - draws the entire UI.
pub fn render(f: &mut Frame, app: &App) {
    if app.zen {
        zen::render(f, app);
        return;
    }

    let size = f.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(f, app, rows[0]);

    match app.view {
        View::Timer => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(36)])
                .split(rows[1]);
            timer_pane::render(f, app, cols[0]);
            project_pane::render(f, app, cols[1]);
        }
        View::Dashboard => dashboard_pane::render(f, app, rows[1]),
    }

    render_hints(f, app, rows[2]);

    if app.show_help {
        help::render(f, size);
    }
    if app.form.is_some() {
        project_form::render(f, app, size);
    }
}

fn render_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let view_label = match app.view {
        View::Timer => "[timer] dashboard",
        View::Dashboard => "timer [dashboard]",
    };
    let line = Line::from(vec![
        Span::styled(" KinyTimer ", title_style()),
        Span::raw("  "),
        Span::styled(view_label, hint_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        let line = Line::from(Span::styled(format!(" {status}"), status_style()));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = Line::from(vec![
        Span::raw(" space start/pause   "),
        Span::raw("s stop   "),
        Span::raw("r reset   "),
        Span::raw("z zen   "),
        Span::raw("d dashboard   "),
        Span::raw("j/k project   "),
        Span::raw("n new project   "),
        Span::raw("? help   "),
        Span::raw("q quit"),
    ]);
    f.render_widget(Paragraph::new(hints).style(hint_style()), area);
}

/// Centered rect for modal overlays.
pub fn modal_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Pad lines so `content` lines sit vertically centered in `height` rows.
pub fn vertical_pad(height: u16, content: u16) -> Vec<Line<'static>> {
    let pad = height.saturating_sub(content) / 2;
    (0..pad).map(|_| Line::raw("")).collect()
}

/// Helper used by several panes for centered paragraphs.
pub fn centered(lines: Vec<Line<'_>>) -> Paragraph<'_> {
    Paragraph::new(lines).alignment(Alignment::Center)
}
