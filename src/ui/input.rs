use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => app.toggle_follow(now),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
