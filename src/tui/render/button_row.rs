use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, Command};
use crate::util::unicode::display_width;

/// Cells between neighbouring buttons
const GAP: u16 = 1;

/// Button width: label plus one cell of padding and a border on each side
fn button_width(command: Command) -> u16 {
    display_width(command.label()) as u16 + 4
}

/// Render the four command buttons centered in `area` and record their rects
/// for mouse hit-testing. Buttons that do not fit are clipped.
pub fn render_button_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let total: u16 = Command::ALL.iter().map(|&c| button_width(c)).sum::<u16>()
        + GAP * (Command::ALL.len() as u16 - 1);

    app.hit_areas.buttons.clear();
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    for (i, &command) in Command::ALL.iter().enumerate() {
        let width = button_width(command).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let rect = Rect::new(x, area.y, width, area.height);
        let focused = i == app.focused_button;

        let (border_type, border_style, label_style) = if focused {
            (
                BorderType::Thick,
                Style::default().fg(app.theme.highlight).bg(app.theme.button_bg),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.button_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                BorderType::Plain,
                Style::default().fg(app.theme.dim).bg(bg),
                Style::default().fg(app.theme.text).bg(bg),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(border_style.bg.unwrap_or(bg)));
        let button = Paragraph::new(Line::from(Span::styled(command.label(), label_style)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, rect);
        app.hit_areas.buttons.push((command, rect));

        x = x.saturating_add(width + GAP);
    }
}
