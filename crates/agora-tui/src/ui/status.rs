//! Status bar
//!
//! Displays the last status message and what is loading.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, labels::labels};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let text = labels(app.locale());

    let mut spans = vec![Span::raw(" ")];
    if !app.loading().is_idle() {
        spans.push(Span::styled(
            text.loading,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::raw(app.status_message().unwrap_or(text.help)));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
