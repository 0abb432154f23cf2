//! Session context.
//!
//! The authenticated user travels as an explicit [`Session`] value,
//! initialized on login success and torn down on logout. Exactly one
//! value is persisted across restarts -- the session itself, as a small
//! JSON file -- and nothing else.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tracktor_core::{CoreError, Id};
use tracktor_remote::ProductionService;

use crate::error::AppResult;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Id,
    pub user_name: String,
}

/// Durable storage for the persisted session.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tracktor")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted session, if one exists and parses. A corrupt file
    /// reads as logged-out rather than an error.
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Ignoring corrupt session file");
                None
            }
        }
    }

    /// Persist a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                CoreError::Internal(format!("Cannot create session directory: {err}"))
            })?;
        }
        let json = serde_json::to_string(session)
            .map_err(|err| CoreError::Internal(format!("Cannot serialize session: {err}")))?;
        std::fs::write(&self.path, json)
            .map_err(|err| CoreError::Internal(format!("Cannot write session file: {err}")))
    }

    /// Remove the persisted session. Removing an absent file is fine.
    pub fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CoreError::Internal(format!(
                "Cannot remove session file: {err}"
            ))),
        }
    }
}

/// Verify credentials against the remote and persist the session.
///
/// Bad credentials come back as a remote rejection carrying the server's
/// message; nothing is persisted in that case.
pub async fn login<S>(
    service: &S,
    file: &SessionFile,
    name: &str,
    password: &str,
) -> AppResult<Session>
where
    S: ProductionService + ?Sized,
{
    let user_id = service.login(name, password).await?;
    let session = Session {
        user_id,
        user_name: name.to_string(),
    };
    file.save(&session)?;
    tracing::info!(user_id, user_name = %session.user_name, "Logged in");
    Ok(session)
}

/// Register a new account. The caller logs in separately.
pub async fn signup<S>(service: &S, name: &str, password: &str) -> AppResult<()>
where
    S: ProductionService + ?Sized,
{
    service.signup(name, password).await?;
    tracing::info!(user_name = %name, "Account created");
    Ok(())
}

/// Tear the session down: forget the persisted value.
pub fn logout(file: &SessionFile) -> AppResult<()> {
    file.clear()?;
    tracing::info!("Logged out");
    Ok(())
}
