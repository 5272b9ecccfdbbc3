use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::tui::app::App;
use crate::util::unicode::pad_to_width;

/// Render the bordered, scrollable task list. Every row is rebuilt from the
/// task list on each frame.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hit_areas.list = inner;
    let height = inner.height as usize;
    app.clamp_scroll(height);

    let selected = app.selected_index();
    let lines: Vec<Line> = app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, task)| {
            let text = task.to_string();
            if Some(i) == selected {
                let style = Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD);
                // Pad so the highlight spans the whole row
                Line::from(Span::styled(pad_to_width(&text, inner.width as usize), style))
            } else {
                let style = Style::default()
                    .fg(app.theme.task_color(task.complete))
                    .bg(bg);
                Line::from(Span::styled(text, style))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);

    if app.tasks.len() > height {
        let mut state = ScrollbarState::new(app.tasks.len().saturating_sub(height))
            .position(app.scroll_offset);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render_list(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_task_list(frame, app, area))
    }

    #[test]
    fn rows_use_checkbox_markers() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        task_ops::toggle_complete(&mut app.tasks, 1).unwrap();
        let output = render_list(&mut app, 20, 4);
        assert_eq!(
            output,
            "\
┌──────────────────┐
│[  ] Buy milk     │
│[X] Walk dog      │
└──────────────────┘"
        );
    }

    #[test]
    fn empty_list_renders_empty_box() {
        let mut app = app_with_tasks(&[]);
        let output = render_list(&mut app, 10, 3);
        assert_eq!(output, "┌────────┐\n│        │\n└────────┘");
    }

    #[test]
    fn long_descriptions_are_clipped() {
        let mut app = app_with_tasks(&["a very long task description"]);
        let output = render_list(&mut app, 12, 3);
        assert_eq!(output.lines().nth(1), Some("│[  ] a ver│"));
    }

    #[test]
    fn selected_row_is_highlighted() {
        let mut app = app_with_tasks(&["a", "b"]);
        app.select(1);
        let buf = render_to_buffer(20, 4, |frame, area| render_task_list(frame, &mut app, area));
        let sel_bg = app.theme.selection_bg;
        // Whole row 2 (inside the border) carries the selection background
        for x in 1..19u16 {
            assert_eq!(buf[(x, 2)].bg, sel_bg, "column {x}");
        }
        assert_ne!(buf[(1u16, 1u16)].bg, sel_bg);
    }

    #[test]
    fn list_scrolls_to_keep_selection_visible() {
        let names: Vec<String> = (0..10).map(|i| format!("task {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut app = app_with_tasks(&refs);
        app.select(9);
        let output = render_list(&mut app, 20, 5);
        let rows: Vec<&str> = output
            .lines()
            .skip(1)
            .take(3)
            .map(|l| {
                l.trim_start_matches('│')
                    .trim_end_matches(|c: char| c == ' ' || "│█║▲▼".contains(c))
            })
            .collect();
        assert_eq!(rows, vec!["[  ] task 7", "[  ] task 8", "[  ] task 9"]);
        assert_eq!(app.scroll_offset, 7);
    }

    #[test]
    fn list_records_row_area_for_mouse() {
        let mut app = app_with_tasks(&["a"]);
        render_list(&mut app, 20, 6);
        assert_eq!(app.hit_areas.list, Rect::new(1, 1, 18, 4));
    }
}
