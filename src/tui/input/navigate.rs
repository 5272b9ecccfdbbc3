use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Close the window
        (_, KeyCode::Esc) => app.should_quit = true,
        (m, KeyCode::Char('c' | 'q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // List selection
        (_, KeyCode::Up) => app.select_prev(),
        (_, KeyCode::Down) => app.select_next(),
        (_, KeyCode::Home) => app.select_first(),
        (_, KeyCode::End) => app.select_last(),

        // Button focus
        (_, KeyCode::Left | KeyCode::BackTab) => app.cycle_focus(-1),
        (_, KeyCode::Right | KeyCode::Tab) => app.cycle_focus(1),

        // Press the focused button
        (_, KeyCode::Enter | KeyCode::Char(' ')) => {
            let command = app.focused_command();
            app.press(command);
        }
        _ => {}
    }
}
