//! Entry screen
//!
//! Shown while nobody is signed in.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{App, labels::labels};

/// Render the sign-in help.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let text = labels(app.locale());
    let lines: Vec<Line> = text.entry_help.iter().map(|line| Line::raw(*line)).collect();

    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", text.app_name));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
