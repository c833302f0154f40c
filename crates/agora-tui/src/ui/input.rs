//! Input line
//!
//! Displays the input buffer with cursor, or a placeholder for the current
//! view while empty.

use agora_app::View;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, InputState, labels::labels};

const PROMPT: &str = "> ";
const PROMPT_WIDTH: u16 = 3; // border + "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let paragraph = if input.buffer().is_empty() {
        let text = labels(app.locale());
        let placeholder = match app.view() {
            View::Entry => text.type_command,
            View::Forums => text.search_forum,
            View::Topics => text.search_topic,
            View::Thread => text.write_reply,
        };
        Paragraph::new(format!("{PROMPT}{placeholder}")).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(format!("{PROMPT}{}", input.buffer())).style(Style::default().fg(Color::White))
    };
    frame.render_widget(paragraph.block(block), area);

    if app.modal().is_some() || app.alert().is_some() {
        return;
    }

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = (input.cursor() as u16).min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);

    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}
