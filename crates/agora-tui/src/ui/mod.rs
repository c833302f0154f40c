//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod alert;
mod entry;
mod header;
mod input;
mod lists;
mod modal;
mod status;
mod thread;

use agora_app::View;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, InputState};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input_state: &InputState) {
    const HEADER_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, app, *header_area);
    match app.view() {
        View::Entry => entry::render(frame, app, *main_area),
        View::Forums => lists::render_forums(frame, app, input_state, *main_area),
        View::Topics => lists::render_topics(frame, app, input_state, *main_area),
        View::Thread => thread::render(frame, app, input_state, *main_area),
    }
    input::render(frame, app, input_state, *input_area);
    status::render(frame, app, *status_area);

    // Popups draw over everything, alert on top
    if let Some(modal) = app.modal() {
        modal::render(frame, app, modal);
    }
    if let Some(alert) = app.alert() {
        alert::render(frame, app.locale(), alert);
    }
}

/// Rectangle of `width` x `height` centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
