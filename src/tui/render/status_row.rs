use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of the window): task counts on the left,
/// a key hint on the right when there is room.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let total = app.tasks.len();
    let noun = if total == 1 { "task" } else { "tasks" };
    let counts = format!(
        " {} {}, {} complete",
        total,
        noun,
        app.tasks.complete_count()
    );
    let hint = match app.mode {
        Mode::Navigate => {
            "\u{2191}\u{2193} select  \u{2190}\u{2192} button  Enter press  Esc close "
        }
        Mode::Prompt => "Enter OK  Esc cancel ",
    };

    let mut spans = vec![Span::styled(
        counts.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let content_width = display_width(&counts);
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
