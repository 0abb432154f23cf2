use std::path::PathBuf;

use tracktor_app::SessionFile;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the tracktor server.
    pub api_url: String,
    /// Location of the persisted session file.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env var                 | Default                              |
    /// |-------------------------|--------------------------------------|
    /// | `TRACKTOR_API_URL`      | `http://localhost:8080`              |
    /// | `TRACKTOR_SESSION_FILE` | `<config dir>/tracktor/session.json` |
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRACKTOR_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());

        let session_file = std::env::var("TRACKTOR_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| SessionFile::default_path());

        Self {
            api_url,
            session_file,
        }
    }
}
