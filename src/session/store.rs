use crate::config::Config;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;
use tracing::debug;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(super) struct StoredSession {
    pub access_token: String,
    /// Seconds since Unix epoch at which the session was established
    pub established_at: i64,
}

/// File-backed persistence for the session token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the per-user cache directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::cache_file(SESSION_FILE)?))
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub(super) fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Auth(format!("Failed to read session file: {}", e)))?;

        let session: StoredSession = serde_json::from_str(&contents)
            .map_err(|e| AppError::Auth(format!("Failed to parse session file: {}", e)))?;

        Ok(Some(session))
    }

    pub(super) fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Auth(format!("Failed to create session directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::Auth(format!("Failed to serialize session: {}", e)))?;

        // Owner-only from creation
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600)
            .open(&self.path)
            .map_err(|e| AppError::Auth(format!("Failed to create session file: {}", e)))?;

        file.write_all(contents.as_bytes())
            .map_err(|e| AppError::Auth(format!("Failed to write session file: {}", e)))?;

        Ok(())
    }

    pub(super) fn remove(&self) -> Result<()> {
        if !self.path.exists() {
            debug!("No session file to remove");
            return Ok(());
        }

        fs::remove_file(&self.path)
            .map_err(|e| AppError::Auth(format!("Failed to delete session file: {}", e)))?;

        Ok(())
    }
}
