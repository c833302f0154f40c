//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific
//! frontends. Each frontend implements the trait to provide input and
//! rendering, while the generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{App, AppAction};

/// Abstracts frontend I/O for the application runtime.
///
/// Implementations provide platform-specific input and output while the
/// generic [`Runtime`](crate::Runtime) handles orchestration logic. This
/// ensures the same orchestration code runs in the terminal and in
/// simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm events, ratatui rendering
/// - **Simulation**: scripted operations, recorded renders
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input and translate it into App operations.
    ///
    /// Input may call [`App`] methods or [`App::handle`] directly; the
    /// returned actions are executed by the runtime. An empty list means
    /// nothing happened (e.g. a tick).
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Restore the platform and clean up resources.
    fn stop(&mut self);
}
