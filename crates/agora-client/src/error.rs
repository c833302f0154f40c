//! Client error types.

use std::io;

use thiserror::Error;

/// Errors from a [`crate::ForumApi`] call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or route could not be turned into a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend refused to serve (in-memory backend switched offline).
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// 404 with a short description of what was missing.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::Status { status: 404, body: format!("{} not found", what.into()) }
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from a [`crate::SessionStore`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Session file is not valid JSON.
    #[error("invalid session data: {0}")]
    Json(#[from] serde_json::Error),

    /// In-memory store lock was poisoned.
    #[error("session store poisoned")]
    Poisoned,
}
