//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait over crossterm input and ratatui output.
//! Between key presses the driver emits [`AppEvent::Tick`], and redraws once
//! a minute so relative dates stay current.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use agora_app::{App, AppAction, AppEvent, Driver, KeyInput};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::time::Instant;

use crate::{InputState, ui};

/// Poll interval while no input arrives.
const TICK: Duration = Duration::from_millis(250);

/// Idle time after which the screen is redrawn for relative dates.
const DATE_REFRESH: Duration = Duration::from_secs(60);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Raw mode plus alternate screen, restored on drop.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the [`InputState`] (input line and list highlight), which the App
/// knows nothing about.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    input: InputState,
    last_draw: Instant,
    _screen: ScreenGuard,
}

impl TerminalDriver {
    /// Take over the terminal until the driver is dropped.
    pub fn new() -> Result<Self, TerminalError> {
        let screen = ScreenGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            input: InputState::new(),
            last_draw: Instant::now(),
            _screen: screen,
        })
    }

    fn on_event(&mut self, event: Event, app: &mut App) -> Vec<AppAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(&key) {
                    return app.quit();
                }
                key_input(key.code).map_or_else(Vec::new, |key| self.input.handle_key(key, app))
            },
            Event::Paste(text) => {
                let mut actions = Vec::new();
                for c in text.chars().filter(|c| !c.is_control()) {
                    actions.extend(self.input.handle_key(KeyInput::Char(c), app));
                }
                actions
            },
            Event::Resize(cols, rows) => app.handle(AppEvent::Resize(cols, rows)),
            _ => Vec::new(),
        }
    }
}

/// Actions for an idle tick, `since_draw` after the last frame.
fn on_tick(app: &mut App, since_draw: Duration) -> Vec<AppAction> {
    let mut actions = app.handle(AppEvent::Tick);
    if since_draw >= DATE_REFRESH && !actions.contains(&AppAction::Render) {
        actions.push(AppAction::Render);
    }
    actions
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C'))
}

fn key_input(code: KeyCode) -> Option<KeyInput> {
    let key = match code {
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Delete => KeyInput::Delete,
        KeyCode::Tab => KeyInput::Tab,
        KeyCode::BackTab => KeyInput::BackTab,
        KeyCode::Esc => KeyInput::Esc,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        KeyCode::Up => KeyInput::Up,
        KeyCode::Down => KeyInput::Down,
        KeyCode::Home => KeyInput::Home,
        KeyCode::End => KeyInput::End,
        _ => return None,
    };
    Some(key)
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        tokio::select! {
            biased;

            next = self.events.next() => match next {
                Some(Ok(event)) => Ok(self.on_event(event, app)),
                Some(Err(e)) => Err(TerminalError::Io(e)),
                // stdin closed
                None => Ok(app.quit()),
            },

            () = tokio::time::sleep(TICK) => Ok(on_tick(app, self.last_draw.elapsed())),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.input.follow(app);
        let input = &self.input;
        self.terminal.draw(|frame| ui::render(frame, app, input))?;
        self.last_draw = Instant::now();
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}
