//! Forum and topic lists
//!
//! Filtered by the search line, two rows per entry, with the highlighted
//! entry kept in view.

use agora_core::{Locale, Timestamp, date};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{App, InputState, labels::labels};

const DETAIL_INDENT: &str = "    ";
const DOT: &str = " · ";

/// Render the forum list.
pub fn render_forums(frame: &mut Frame, app: &App, input_state: &InputState, area: Rect) {
    let text = labels(app.locale());
    let forums = app.filtered_forums();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", text.forums, forums.len()));

    if forums.is_empty() {
        let message = if app.loading().forums { text.loading } else { text.no_forums };
        render_placeholder(frame, block, message, area);
        return;
    }

    let items: Vec<ListItem> = forums
        .iter()
        .map(|forum| {
            let title = Line::from(vec![
                Span::styled(format!("[{}] ", forum.tag), Style::default().fg(Color::Cyan)),
                Span::styled(forum.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ]);
            let mut details = vec![
                forum.description.clone(),
                format!("{} {}", forum.topics_count, text.topics_unit),
            ];
            details.extend(relative(forum.created_at, app.locale()));
            ListItem::new(vec![title, detail_line(&details)])
        })
        .collect();

    render_list(frame, items, block, input_state.highlight(forums.len()), area);
}

/// Render the topic list of the selected forum.
pub fn render_topics(frame: &mut Frame, app: &App, input_state: &InputState, area: Rect) {
    let text = labels(app.locale());
    let topics = app.filtered_topics();
    let forum_name = app.selected_forum().map_or("", |f| f.name.as_str());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {forum_name} › {} ({}) ", text.topics, topics.len()));

    if topics.is_empty() {
        let message = if app.loading().topics { text.loading } else { text.no_topics };
        render_placeholder(frame, block, message, area);
        return;
    }

    let items: Vec<ListItem> = topics
        .iter()
        .map(|topic| {
            let title = Line::from(Span::styled(
                topic.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let mut details = vec![
                format!("{} {}", text.by, topic.author),
                format!("{} {}", topic.replies_count, text.replies_unit),
            ];
            details.extend(relative(topic.created_at, app.locale()));
            ListItem::new(vec![title, detail_line(&details)])
        })
        .collect();

    render_list(frame, items, block, input_state.highlight(topics.len()), area);
}

/// Relative date, or nothing for an unknown timestamp.
pub(super) fn relative(timestamp: Timestamp, locale: Locale) -> Option<String> {
    Some(date::format_date_ago(timestamp, locale)).filter(|s| !s.is_empty())
}

fn detail_line(parts: &[String]) -> Line<'static> {
    let parts: Vec<&str> = parts.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
    Line::from(Span::styled(
        format!("{DETAIL_INDENT}{}", parts.join(DOT)),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_placeholder(frame: &mut Frame, block: Block, message: &str, area: Rect) {
    let paragraph =
        Paragraph::new(message).style(Style::default().fg(Color::DarkGray)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_list(
    frame: &mut Frame,
    items: Vec<ListItem>,
    block: Block,
    highlight: Option<usize>,
    area: Rect,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(highlight);
    frame.render_stateful_widget(list, area, &mut state);
}
