pub mod button_row;
pub mod helpers;
pub mod prompt_popup;
pub mod status_row;
pub mod task_list_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::App;
use helpers::centered_rect_fixed;

/// Main render function — draws the fixed-size window and dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    frame.render_widget(Block::default().style(bg_style), area);

    // The window keeps its configured size regardless of the terminal size
    let window = centered_rect_fixed(app.window.width, app.window.height, area);
    let window_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.window.title))
        .title_style(Style::default().fg(app.theme.text_bright).bg(bg))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(bg_style);
    let inner = window_block.inner(window);
    frame.render_widget(window_block, window);

    // Layout: heading | gap | task list | buttons | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading label
            Constraint::Length(1), // gap
            Constraint::Fill(1),   // task list
            Constraint::Length(3), // button row
            Constraint::Length(1), // status row
        ])
        .split(inner);

    let heading_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let heading = Paragraph::new(Line::from(Span::styled(
        app.window.heading.clone(),
        heading_style,
    )))
    .alignment(Alignment::Center)
    .style(bg_style);
    frame.render_widget(heading, chunks[0]);

    task_list_view::render_task_list(frame, app, chunks[2]);
    button_row::render_button_row(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Modal prompt (rendered on top of everything)
    if app.prompt.is_some() {
        prompt_popup::render_prompt_popup(frame, app, window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_with_sample_tasks() {
        let mut app = app_with_tasks(&["Complete homework", "Buy groceries", "Exercise"]);
        app.window.width = SNAP_W;
        app.window.height = SNAP_H;
        let output = render_to_string(SNAP_W, SNAP_H, |frame, _| render(frame, &mut app));
        assert_snapshot!(output, @r"
        ┌ TODO Application ──────────────────────────────────────────────────┐
        │                           To-Do Task List                          │
        │                                                                    │
        │┌──────────────────────────────────────────────────────────────────┐│
        ││[  ] Complete homework                                            ││
        ││[  ] Buy groceries                                                ││
        ││[  ] Exercise                                                     ││
        ││                                                                  ││
        │└──────────────────────────────────────────────────────────────────┘│
        │  ┏━━━━━━━━━━━━━━┓ ┌───────────┐ ┌─────────────┐ ┌───────────────┐  │
        │  ┃ Add New Task ┃ │ Edit Task │ │ Delete Task │ │ Complete Task │  │
        │  ┗━━━━━━━━━━━━━━┛ └───────────┘ └─────────────┘ └───────────────┘  │
        │ 3 tasks, 0 complete   ↑↓ select  ←→ button  Enter press  Esc close │
        └────────────────────────────────────────────────────────────────────┘
        ");
    }

    #[test]
    fn window_keeps_its_size_in_a_large_terminal() {
        let mut app = app_with_tasks(&["Exercise"]);
        app.window.width = 40;
        app.window.height = 12;
        let output = render_to_string(60, 20, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        // Window occupies columns 10..50 and rows 4..16
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("          ┌ TODO Application "));
        assert!(lines[4].ends_with('┐'));
        assert_eq!(lines[4].chars().count(), 50);
        assert!(lines[15].starts_with("          └"));
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn configured_title_and_heading() {
        let mut app = app_with_tasks(&[]);
        app.window.title = "Chores".into();
        app.window.heading = "Weekend".into();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("┌ Chores ─"));
        assert!(output.contains("Weekend"));
        assert!(output.contains(" 0 tasks, 0 complete"));
    }

    #[test]
    fn render_records_hit_areas() {
        let mut app = app_with_tasks(&["a"]);
        app.window.width = SNAP_W;
        app.window.height = SNAP_H;
        render_to_string(SNAP_W, SNAP_H, |frame, _| render(frame, &mut app));
        assert_eq!(app.hit_areas.list, ratatui::layout::Rect::new(2, 4, 66, 4));
        let labels: Vec<_> = app
            .hit_areas
            .buttons
            .iter()
            .map(|(c, r)| (c.label(), r.x, r.width))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Add New Task", 3, 16),
                ("Edit Task", 20, 13),
                ("Delete Task", 34, 15),
                ("Complete Task", 50, 17),
            ]
        );
    }

    #[test]
    fn prompt_is_drawn_over_window() {
        let mut app = app_with_tasks(&["a"]);
        app.press(crate::tui::app::Command::Add);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Add New Task ─"));
        assert!(output.contains("Enter task description:"));
    }
}
