use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::tui::app::App;

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(app, pos),
        MouseEventKind::ScrollDown if app.hit_areas.list.contains(pos) => app.select_next(),
        MouseEventKind::ScrollUp if app.hit_areas.list.contains(pos) => app.select_prev(),
        _ => {}
    }
}

fn click(app: &mut App, pos: Position) {
    if let Some(index) = row_at(app.hit_areas.list, app.scroll_offset, pos) {
        // Clicking below the last row leaves the selection alone
        app.select(index);
        return;
    }
    let hit = app
        .hit_areas
        .buttons
        .iter()
        .position(|(_, rect)| rect.contains(pos));
    if let Some(i) = hit {
        let command = app.hit_areas.buttons[i].0;
        app.focused_button = i;
        app.press(command);
    }
}

/// Task index under `pos`, if it falls inside the list rows
fn row_at(list: Rect, scroll_offset: usize, pos: Position) -> Option<usize> {
    if !list.contains(pos) {
        return None;
    }
    Some(scroll_offset + (pos.y - list.y) as usize)
}
