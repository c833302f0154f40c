//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: forum screen state machine
//! - [`Bridge`]: API bridge
//! - [`SessionStore`]: persisted signed-in user
//! - [`Driver`]: platform-specific I/O

use agora_client::{ForumApi, SessionStore};
use agora_core::Locale;

use crate::{App, AppAction, AppEvent, Bridge, Driver, Operation};

/// Generic runtime that orchestrates App, Bridge, session store and Driver.
///
/// Requests are awaited one at a time, so no two calls are ever in flight.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `A`: Forum API
/// - `S`: Session store
pub struct Runtime<D, A, S>
where
    D: Driver,
    A: ForumApi,
    S: SessionStore,
{
    driver: D,
    app: App,
    bridge: Bridge<A>,
    store: S,
}

impl<D, A, S> Runtime<D, A, S>
where
    D: Driver,
    A: ForumApi,
    S: SessionStore,
{
    /// Create a runtime, restoring the persisted session if there is one.
    ///
    /// An unreadable session is logged and treated as signed out.
    pub fn new(driver: D, api: A, store: S, locale: Locale) -> Self {
        let session = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not restore session");
            None
        });
        if let Some(session) = &session {
            tracing::info!(user = session.id, "session restored");
            api.set_token(session.token.clone());
        }

        let app = App::new(locale, session);
        Self { driver, app, bridge: Bridge::new(api), store }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// This is the core orchestration loop that:
    /// 1. Renders and mounts the screen (loading forums if signed in)
    /// 2. Polls the driver for input
    /// 3. Executes the resulting actions, feeding completion events back into
    ///    the App until no actions remain
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error. API and
    /// session failures are reported to the App instead.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        let actions = self.app.mount();

        if !self.process_actions(actions).await? {
            loop {
                let actions = self.driver.poll_event(&mut self.app).await?;
                if !actions.is_empty() && self.process_actions(actions).await? {
                    break;
                }
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::PersistSession(session) => {
                        let event = match self.store.save(&session) {
                            Ok(()) => {
                                self.bridge.api().set_token(session.token.clone());
                                AppEvent::SessionPersisted(session)
                            },
                            Err(e) => AppEvent::RequestFailed {
                                operation: Operation::SaveSession,
                                reason: e.to_string(),
                            },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::ClearSession => {
                        let event = match self.store.clear() {
                            Ok(()) => {
                                self.bridge.api().set_token(None);
                                AppEvent::LoggedOut
                            },
                            Err(e) => AppEvent::RequestFailed {
                                operation: Operation::ClearSession,
                                reason: e.to_string(),
                            },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },

                    // API operations go through the bridge
                    AppAction::LoadForums
                    | AppAction::LoadTopics { .. }
                    | AppAction::LoadReplies { .. }
                    | AppAction::CreateForum { .. }
                    | AppAction::UpdateForum { .. }
                    | AppAction::DeleteForum { .. }
                    | AppAction::CreateTopic { .. }
                    | AppAction::UpdateTopic { .. }
                    | AppAction::DeleteTopic { .. }
                    | AppAction::CreateReply { .. }
                    | AppAction::UpdateReply { .. }
                    | AppAction::DeleteReply { .. }
                    | AppAction::SetReplyAccepted { .. } => {
                        let events = self.bridge.process_app_action(action).await;
                        for event in events {
                            let new_actions = self.app.handle(event);
                            pending_actions.extend(new_actions);
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the forum API
    pub fn api(&self) -> &A {
        self.bridge.api()
    }

    /// Get a reference to the session store
    pub fn session_store(&self) -> &S {
        &self.store
    }
}
