//! Form and confirmation popups

use agora_app::{DeleteTarget, FormModal, Modal};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered;
use crate::{
    App,
    labels::{confirm_question, form_title, labels},
};

const POPUP_WIDTH: u16 = 60;
const FIELD_HEIGHT: u16 = 3;
const CONFIRM_HEIGHT: u16 = 7;

/// Render the open modal over the screen.
pub fn render(frame: &mut Frame, app: &App, modal: &Modal) {
    match modal {
        Modal::Form(form) => render_form(frame, app, form),
        Modal::ConfirmDelete { target, submitting } => {
            render_confirm(frame, app, *target, *submitting);
        },
    }
}

fn render_form(frame: &mut Frame, app: &App, form: &FormModal) {
    let locale = app.locale();
    let text = labels(locale);
    let fields = form.draft.fields();

    // Borders plus the hint line
    let height = fields.len() as u16 * FIELD_HEIGHT + 3;
    let area = centered(frame.area(), POPUP_WIDTH, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", form_title(form.target, locale)),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (index, (field, row)) in fields.iter().zip(rows.iter()).enumerate() {
        let focused = index == form.focus;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value = form.draft.value(index).unwrap_or_default();
        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", field.label(locale))),
        );
        frame.render_widget(input, *row);

        if focused && !form.submitting {
            set_field_cursor(frame, *row, value);
        }
    }

    if let Some(hint_row) = rows.last() {
        let hint = if form.submitting { text.submitting } else { text.form_keys };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            *hint_row,
        );
    }
}

/// Place the cursor after the value, clamped inside the field box.
fn set_field_cursor(frame: &mut Frame, row: Rect, value: &str) {
    let max_offset = row.width.saturating_sub(2);
    let offset = (value.chars().count() as u16).min(max_offset);
    let x = row.x.saturating_add(1).saturating_add(offset);
    let max_x = row.x.saturating_add(row.width).saturating_sub(1);
    frame.set_cursor_position((x.min(max_x), row.y.saturating_add(1)));
}

fn render_confirm(frame: &mut Frame, app: &App, target: DeleteTarget, submitting: bool) {
    let locale = app.locale();
    let text = labels(locale);

    let area = centered(frame.area(), POPUP_WIDTH, CONFIRM_HEIGHT);
    frame.render_widget(Clear, area);

    let hint = if submitting { text.submitting } else { text.confirm_keys };
    let lines = vec![
        Line::raw(confirm_question(target, locale)),
        Line::raw(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            format!(" {} ", text.confirm_title),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
