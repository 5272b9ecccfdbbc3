use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::tui::app::{App, seed_tasks};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Small window used by whole-window snapshots
pub const SNAP_W: u16 = 70;
pub const SNAP_H: u16 = 14;

/// Render into an in-memory buffer and return it
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App with default config and the given tasks, all open.
pub fn app_with_tasks(descriptions: &[&str]) -> App {
    let descriptions: Vec<String> = descriptions.iter().map(|s| s.to_string()).collect();
    App::new(seed_tasks(&descriptions), &AppConfig::default())
}
