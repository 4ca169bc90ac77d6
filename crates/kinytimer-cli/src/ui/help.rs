use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::{
    modal_area,
    styles::{modal_bg_style, modal_title_style},
};

/// Render the keyboard shortcuts overlay.
pub fn render(f: &mut Frame, area: Rect) {
    let shortcuts = [
        ("space", "Start / pause timer"),
        ("s", "Stop timer"),
        ("r", "Reset timer"),
        ("z", "Zen mode"),
        ("d", "Toggle dashboard"),
        ("j / k", "Select project"),
        ("n", "New project"),
        ("?", "Toggle this help"),
        ("esc", "Close overlay / exit zen"),
        ("q", "Quit"),
    ];

    let overlay = modal_area(area, 44, shortcuts.len() as u16 + 4);
    f.render_widget(Clear, overlay);

    let mut lines = vec![Line::raw("")];
    for (key, action) in shortcuts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<8}"), modal_title_style()),
            Span::raw(action),
        ]));
    }
    lines.push(Line::raw(""));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Keyboard Shortcuts ", modal_title_style()))
            .style(modal_bg_style()),
    );
    f.render_widget(paragraph, overlay);
}
