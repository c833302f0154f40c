//! Alert popup

use agora_app::{Alert, AlertKind};
use agora_core::Locale;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered;
use crate::labels::labels;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 7;

/// Render the alert over everything else.
pub fn render(frame: &mut Frame, locale: Locale, alert: &Alert) {
    let color = match alert.kind {
        AlertKind::Error => Color::Red,
        AlertKind::Denied => Color::Magenta,
        AlertKind::Invalid => Color::Yellow,
        AlertKind::Info => Color::Cyan,
    };

    let area = centered(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::raw(alert.message.as_str()),
        Line::raw(""),
        Line::from(Span::styled(labels(locale).alert_keys, Style::default().fg(Color::DarkGray))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
