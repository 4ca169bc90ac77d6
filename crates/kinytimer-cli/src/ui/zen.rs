//! Distraction-free display: nothing but the countdown.

use kinytimer_core::stats::format_duration;
use ratatui::{
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::ui::{
    centered,
    styles::{countdown_style, dim_style, hint_style},
    vertical_pad,
};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.size();
    let state = app.engine.state();

    let mut lines = vertical_pad(area.height, 5);
    lines.push(Line::from(Span::styled(state.mode.label(), dim_style())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format_duration(state.remaining_secs as u64),
        countdown_style(),
    )));
    lines.push(Line::raw(""));
    let hint = if state.is_running && state.is_paused {
        "paused · space to resume · esc to exit"
    } else {
        "esc to exit"
    };
    lines.push(Line::from(Span::styled(hint, hint_style())));

    f.render_widget(centered(lines), area);
}
