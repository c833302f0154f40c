//! Scripted [`Driver`] for flow tests.
//!
//! `SimDriver` stands in for the terminal: the same [`agora_app::Runtime`]
//! loop that serves the `agora` binary runs here against a script instead of
//! a keyboard, with no terminal and no network.
//!
//! Input is a script of [`SimInput`]s, one consumed per poll. When the script
//! runs out the driver asks the App to quit, so `Runtime::run` returns.

use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use agora_app::{App, AppAction, AppEvent, Driver, View};

use crate::invariants::{InvariantRegistry, ScreenSnapshot};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Operation performed on the App by one poll.
pub enum SimInput {
    /// Feed an event to [`App::handle`].
    Event(AppEvent),
    /// Call App methods, e.g. `|app| app.select_forum(1)`.
    Call(Box<dyn FnOnce(&mut App) -> Vec<AppAction> + Send>),
    /// Quit immediately, leaving the rest of the script unread.
    Quit,
}

impl fmt::Debug for SimInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => f.debug_tuple("Event").field(event).finish(),
            Self::Call(_) => f.write_str("Call(..)"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// Shared state for script injection and render capture.
///
/// This allows injection from outside async contexts, after the driver has
/// been moved into a runtime.
#[derive(Default)]
struct SharedState {
    script: VecDeque<SimInput>,
    renders: usize,
    views: Vec<View>,
    polls: usize,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`agora_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
#[derive(Clone)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver with an empty script.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking.
    ///
    /// Checks run on every render and before every poll; the latter also
    /// require loading to have settled.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Append an input to the script.
    pub fn push(&self, input: SimInput) {
        self.lock().script.push_back(input);
    }

    /// Append a call on the App to the script.
    pub fn call(&self, f: impl FnOnce(&mut App) -> Vec<AppAction> + Send + 'static) {
        self.push(SimInput::Call(Box::new(f)));
    }

    /// Append an `AppEvent` to the script.
    pub fn inject_event(&self, event: AppEvent) {
        self.push(SimInput::Event(event));
    }

    /// Check if there is unread script.
    pub fn has_pending(&self) -> bool {
        !self.lock().script.is_empty()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    /// View shown by each render, in order.
    pub fn rendered_views(&self) -> Vec<View> {
        self.lock().views.clone()
    }

    /// Number of polls so far.
    pub fn poll_count(&self) -> usize {
        self.lock().polls
    }

    /// Whether the runtime has stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Check invariants against App state.
    pub fn check_invariants(&self, app: &App, quiescent: bool, context: &str) {
        if let Some(registry) = &self.invariants {
            registry.assert_all(&ScreenSnapshot::from_app(app, quiescent), context);
        }
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        // A poisoned lock means a test already panicked; keep its state readable.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let (input, poll) = {
            let mut state = self.lock();
            state.polls += 1;
            (state.script.pop_front(), state.polls)
        };
        tracing::trace!(poll, ?input, "sim poll");
        self.check_invariants(app, true, &format!("before poll {poll}"));

        let actions = match input {
            Some(SimInput::Event(event)) => app.handle(event),
            Some(SimInput::Call(f)) => f(app),
            Some(SimInput::Quit) | None => app.quit(),
        };
        Ok(actions)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let render = {
            let mut state = self.lock();
            state.renders += 1;
            state.views.push(app.view());
            state.renders
        };
        self.check_invariants(app, false, &format!("at render {render}"));
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use agora_core::{Locale, Profession, UserSession};

    use super::*;

    fn app() -> App {
        App::new(Locale::EnUs, Some(UserSession::new(1, "Ana", Profession::Student)))
    }

    #[test]
    fn push_queues_input() {
        let driver = SimDriver::new();
        driver.inject_event(AppEvent::Tick);

        assert!(driver.has_pending());
    }

    #[tokio::test]
    async fn poll_event_runs_call() {
        let mut driver = SimDriver::new();
        let mut app = app();
        driver.call(|app| app.set_forum_search("mat"));

        let actions = driver.poll_event(&mut app).await.unwrap();

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.forum_search(), "mat");
    }

    #[tokio::test]
    async fn empty_script_quits() {
        let mut driver = SimDriver::new();
        let mut app = app();

        let actions = driver.poll_event(&mut app).await.unwrap();

        assert_eq!(actions, vec![AppAction::Quit]);
    }

    #[test]
    fn render_records_view() {
        let mut driver = SimDriver::new();
        driver.render(&app()).unwrap();

        assert_eq!(driver.render_count(), 1);
        assert_eq!(driver.rendered_views(), vec![View::Forums]);
    }

    #[test]
    fn clones_share_state() {
        let driver = SimDriver::new();
        let handle = driver.clone();
        handle.inject_event(AppEvent::Tick);

        assert!(driver.has_pending());
    }
}
