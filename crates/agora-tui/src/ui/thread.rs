//! Thread view
//!
//! The opening post of the selected topic above its replies.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::lists::relative;
use crate::{App, InputState, labels::labels};

const POST_HEIGHT: u16 = 6;
const ACCEPTED_MARK: &str = "✔ ";

/// Render the thread of the selected topic.
pub fn render(frame: &mut Frame, app: &App, input_state: &InputState, area: Rect) {
    let [post_area, replies_area] =
        Layout::vertical([Constraint::Length(POST_HEIGHT), Constraint::Min(0)]).areas(area);

    render_post(frame, app, post_area);
    render_replies(frame, app, input_state, replies_area);
}

fn render_post(frame: &mut Frame, app: &App, area: Rect) {
    let Some(topic) = app.selected_topic() else {
        return;
    };
    let text = labels(app.locale());

    let mut byline = format!("{} {}", text.by, topic.author);
    if let Some(when) = relative(topic.created_at, app.locale()) {
        byline.push_str(" · ");
        byline.push_str(&when);
    }
    let lines = vec![
        Line::from(Span::styled(byline, Style::default().fg(Color::DarkGray))),
        Line::raw(topic.content.as_str()),
    ];

    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        format!(" {} ", topic.title),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_replies(frame: &mut Frame, app: &App, input_state: &InputState, area: Rect) {
    let text = labels(app.locale());
    let replies = app.replies();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", text.replies, replies.len()));

    if replies.is_empty() {
        let message = if app.loading().replies { text.loading } else { text.no_replies };
        let paragraph =
            Paragraph::new(message).style(Style::default().fg(Color::DarkGray)).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let own_id = app.session().map(|s| s.id);
    let items: Vec<ListItem> = replies
        .iter()
        .map(|reply| {
            let author_style = if own_id.is_some() && reply.author_id == own_id {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            };
            let mut heading = vec![
                Span::styled(format!("#{} ", reply.id), Style::default().fg(Color::DarkGray)),
                Span::styled(reply.author.as_str(), author_style),
            ];
            if let Some(when) = relative(reply.created_at, app.locale()) {
                heading.push(Span::styled(
                    format!(" · {when}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if reply.accepted {
                heading.push(Span::raw("  "));
                heading.push(Span::styled(
                    format!("{ACCEPTED_MARK}{}", text.accepted),
                    Style::default().fg(Color::Green),
                ));
            }

            let mut lines = vec![Line::from(heading)];
            lines.extend(reply.text.lines().map(|line| Line::raw(format!("  {line}"))));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(input_state.highlight(replies.len()));
    frame.render_stateful_widget(list, area, &mut state);
}
