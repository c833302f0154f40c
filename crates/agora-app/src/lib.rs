//! Application layer for Agora
//!
//! Pure screen controller plus a generic runtime, so the same orchestration
//! code runs in the terminal frontend and in scripted simulation.
//!
//! # Components
//!
//! - [`App`]: forum screen state machine (navigation, filters, modals, role
//!   gates)
//! - [`Bridge`]: turns API-bound actions into [`agora_client::ForumApi`] calls
//! - [`Driver`]: trait for platform-specific input and rendering
//! - [`Runtime`]: orchestration loop over a driver, an API and a session store

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod driver;
mod event;
mod input;
mod notice;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use bridge::Bridge;
pub use driver::Driver;
pub use event::{AppEvent, Operation};
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{Alert, AlertKind, DeleteTarget, FormModal, FormTarget, Loading, Modal, View};
