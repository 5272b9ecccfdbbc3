mod mouse;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::{App, Mode};

use mouse::handle_mouse_event;
use navigate::handle_navigate;
use prompt::{handle_prompt, insert_text};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Prompt => handle_prompt(app, key),
    }
}

/// Handle a mouse event. The prompt is modal, so the mouse is ignored while it is open.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode == Mode::Navigate {
        handle_mouse_event(app, mouse);
    }
}

/// Handle a bracketed paste event. Only the prompt accepts text; newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Prompt || text.is_empty() {
        return;
    }
    let clean = text.replace('\n', " ").replace('\r', "");
    insert_text(app, &clean);
}
