use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.resolve_prompt(None),
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.resolve_prompt(None),
        (_, KeyCode::Enter) => {
            let answer = app.prompt.as_ref().map(|p| p.buffer.clone());
            app.resolve_prompt(answer);
        }
        (_, KeyCode::Backspace) => backspace(app),
        (_, KeyCode::Delete) => delete_forward(app),
        (_, KeyCode::Left) => move_cursor(app, Motion::Left),
        (_, KeyCode::Right) => move_cursor(app, Motion::Right),
        (_, KeyCode::Home) => move_cursor(app, Motion::Home),
        (_, KeyCode::End) => move_cursor(app, Motion::End),
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Insert text at the prompt cursor
pub(super) fn insert_text(app: &mut App, text: &str) {
    if let Some(p) = &mut app.prompt {
        p.buffer.insert_str(p.cursor, text);
        p.cursor += text.len();
    }
}

fn backspace(app: &mut App) {
    if let Some(p) = &mut app.prompt
        && let Some(prev) = prev_grapheme_boundary(&p.buffer, p.cursor)
    {
        p.buffer.replace_range(prev..p.cursor, "");
        p.cursor = prev;
    }
}

fn delete_forward(app: &mut App) {
    if let Some(p) = &mut app.prompt
        && let Some(next) = next_grapheme_boundary(&p.buffer, p.cursor)
    {
        p.buffer.replace_range(p.cursor..next, "");
    }
}

enum Motion {
    Left,
    Right,
    Home,
    End,
}

fn move_cursor(app: &mut App, motion: Motion) {
    let Some(p) = &mut app.prompt else {
        return;
    };
    p.cursor = match motion {
        Motion::Left => prev_grapheme_boundary(&p.buffer, p.cursor).unwrap_or(p.cursor),
        Motion::Right => next_grapheme_boundary(&p.buffer, p.cursor).unwrap_or(p.cursor),
        Motion::Home => 0,
        Motion::End => p.buffer.len(),
    };
}
