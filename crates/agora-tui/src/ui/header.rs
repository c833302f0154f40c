//! Header
//!
//! Breadcrumbs of the current selection and the signed-in user.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, labels::labels};

const SEPARATOR: &str = " › ";

/// Render the header line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let text = labels(app.locale());
    let style = Style::default().bg(Color::Blue).fg(Color::White);

    let mut crumbs = vec![
        Span::styled(format!(" {} ", text.app_name), style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ];
    if app.session().is_some() {
        crumbs.push(Span::raw(text.forums));
    }
    if let Some(forum) = app.selected_forum() {
        crumbs.push(Span::raw(SEPARATOR));
        crumbs.push(Span::raw(forum.name.as_str()));
    }
    if let Some(topic) = app.selected_topic() {
        crumbs.push(Span::raw(SEPARATOR));
        crumbs.push(Span::raw(topic.title.as_str()));
    }

    let user = app.session().map_or_else(String::new, |session| {
        format!("{} ({}) ", session.name, text.role(session.profession))
    });
    let user_width = user.chars().count() as u16;
    let [crumbs_area, user_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(user_width)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(crumbs)).style(style), crumbs_area);
    frame.render_widget(Paragraph::new(user).style(style), user_area);
}
