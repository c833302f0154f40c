//! Client
//!
//! Thin REST client for the forum API plus the persisted user session.
//!
//! # Components
//!
//! - [`ForumApi`]: one async method per endpoint
//! - [`HttpApi`]: reqwest implementation against a real server
//! - [`MemoryApi`]: in-process emulation of the server (demo mode, tests)
//! - [`SessionStore`]: load/save/clear of the signed-in user under a fixed key

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod error;
mod http;
mod memory;
mod routes;
pub mod session;

pub use api::ForumApi;
pub use error::{ApiError, SessionError};
pub use http::{ClientConfig, HttpApi};
pub use memory::MemoryApi;
pub use routes::Route;
pub use session::{FileSessionStore, MemorySessionStore, SESSION_KEY, SessionStore};
