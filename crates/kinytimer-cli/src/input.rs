//! Keyboard handling for the interactive application.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, ProjectForm};
use crate::ui::styles::PALETTE;

/// Handle one key press. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Any interaction clears a lingering status message.
    app.status = None;

    if app.form.is_some() {
        handle_form_key(app, key);
        return false;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return false;
    }

    if app.zen {
        match key.code {
            KeyCode::Esc | KeyCode::Char('z') => app.zen = false,
            KeyCode::Char(' ') => app.toggle_start_pause(),
            KeyCode::Char('s') => app.stop_timer(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') => app.toggle_start_pause(),
        KeyCode::Char('s') => app.stop_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('z') => app.zen = true,
        KeyCode::Char('d') => app.toggle_view(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('n') => app.open_form(),
        KeyCode::Up | KeyCode::Char('k') => app.select_offset(-1),
        KeyCode::Down | KeyCode::Char('j') => app.select_offset(1),
        _ => {}
    }
    false
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.form = None,
        KeyCode::Enter => app.submit_form(),
        other => {
            if let Some(form) = app.form.as_mut() {
                edit_form(form, other);
            }
        }
    }
}

fn edit_form(form: &mut ProjectForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.editing_field = (form.editing_field + 1) % 3,
        KeyCode::BackTab | KeyCode::Up => form.editing_field = (form.editing_field + 2) % 3,
        KeyCode::Left => {
            form.color_index = (form.color_index + PALETTE.len() - 1) % PALETTE.len();
        }
        KeyCode::Right => form.color_index = (form.color_index + 1) % PALETTE.len(),
        KeyCode::Backspace => {
            active_field(form).pop();
        }
        KeyCode::Char(c) => active_field(form).push(c),
        _ => {}
    }
}

fn active_field(form: &mut ProjectForm) -> &mut String {
    match form.editing_field {
        0 => &mut form.name,
        1 => &mut form.repo,
        _ => &mut form.branch,
    }
}
