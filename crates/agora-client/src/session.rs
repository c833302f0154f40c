//! Persisted user session.
//!
//! The signed-in user survives restarts under a single key, [`SESSION_KEY`].
//! Loading a missing session is not an error.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use agora_core::UserSession;

use crate::SessionError;

/// Key the session is stored under.
pub const SESSION_KEY: &str = "auth_user";

/// Storage for the signed-in user.
///
/// Calls are synchronous; a session is a few hundred bytes.
pub trait SessionStore: Send {
    /// Stored session, or `None` if nobody is signed in.
    fn load(&self) -> Result<Option<UserSession>, SessionError>;

    /// Replace the stored session.
    fn save(&mut self, session: &UserSession) -> Result<(), SessionError>;

    /// Remove the stored session. Clearing an empty store succeeds.
    fn clear(&mut self) -> Result<(), SessionError>;
}

/// Session stored as `<dir>/auth_user.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store inside `dir`. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(format!("{SESSION_KEY}.json")) }
    }

    /// Full path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<UserSession>, SessionError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&mut self, session: &UserSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), user = session.id, "session saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session cleared");
                Ok(())
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session held in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<UserSession>>,
}

impl MemorySessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `session`.
    pub fn with_session(session: UserSession) -> Self {
        Self { session: Mutex::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<UserSession>, SessionError> {
        Ok(self.session.lock().map_err(|_| SessionError::Poisoned)?.clone())
    }

    fn save(&mut self, session: &UserSession) -> Result<(), SessionError> {
        *self.session.lock().map_err(|_| SessionError::Poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        *self.session.lock().map_err(|_| SessionError::Poisoned)? = None;
        Ok(())
    }
}
