use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::scroll_to_cursor;

use super::helpers::centered_rect_fixed;

const POPUP_W: u16 = 50;
const POPUP_H: u16 = 5;

/// Render the modal text prompt centered over `area` and place the terminal
/// cursor in its input field
pub fn render_prompt_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else {
        return;
    };

    let bg = app.theme.background;
    let popup_w = POPUP_W.min(area.width.saturating_sub(4));
    let overlay_area = centered_rect_fixed(popup_w, POPUP_H, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.kind.title()))
        .title_style(
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);
    if inner.height < 2 || inner.width < 3 {
        return;
    }

    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {}", prompt.kind.label()),
        Style::default().fg(app.theme.text).bg(bg),
    )));
    frame.render_widget(label, Rect::new(inner.x, inner.y, inner.width, 1));

    // One-line input field, scrolled horizontally to keep the cursor visible
    let field = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1);
    let (start, cursor_col) = scroll_to_cursor(&prompt.buffer, prompt.cursor, field.width as usize);
    let input = Paragraph::new(Line::from(Span::raw(&prompt.buffer[start..]))).style(
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.button_bg),
    );
    frame.render_widget(input, field);
    frame.set_cursor_position(Position::new(field.x + cursor_col as u16, field.y));
}
