mod auth;
mod store;

pub use auth::login;
pub use store::SessionStore;

use crate::error::Result;
use store::StoredSession;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Holds the bearer token used by authenticated API calls.
///
/// The token is mirrored to a [`SessionStore`] so that a later run picks
/// it up without signing in again. `clear` removes both copies.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    current: Option<StoredSession>,
    phase: Phase,
}

impl Session {
    /// Re-establish a previously persisted session, if there is one.
    ///
    /// An unreadable session file is treated as signed out.
    pub fn restore(store: SessionStore) -> Self {
        let current = match store.load() {
            Ok(current) => current,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session");
                None
            }
        };

        let phase = match current {
            Some(_) => Phase::Authenticated,
            None => Phase::Anonymous,
        };
        debug!(?phase, "Restored session");

        Self {
            store,
            current,
            phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_established(&self) -> bool {
        self.current.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.access_token.as_str())
    }

    pub(crate) fn begin_login(&mut self) {
        self.phase = Phase::Authenticating;
    }

    pub(crate) fn abort_login(&mut self) {
        self.phase = match self.current {
            Some(_) => Phase::Authenticated,
            None => Phase::Anonymous,
        };
    }

    /// Persist the token, then hold it in memory
    pub fn establish(&mut self, access_token: String) -> Result<()> {
        let session = StoredSession {
            access_token,
            established_at: chrono::Utc::now().timestamp(),
        };

        if let Err(e) = self.store.save(&session) {
            self.abort_login();
            return Err(e);
        }
        self.current = Some(session);
        self.phase = Phase::Authenticated;

        debug!("Session established");
        Ok(())
    }

    /// Remove the persisted token, then forget the in-memory one.
    ///
    /// If the file cannot be removed the session stays established.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove()?;
        self.current = None;
        self.phase = Phase::Anonymous;

        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("product-finder").join("session.json"))
    }

    #[test]
    fn test_restore_without_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::restore(temp_store(&dir));

        assert_eq!(session.phase(), Phase::Anonymous);
        assert!(!session.is_established());
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_establish_persists_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::restore(temp_store(&dir));

        session.begin_login();
        assert_eq!(session.phase(), Phase::Authenticating);

        session.establish("tok_123".to_string()).unwrap();
        assert_eq!(session.phase(), Phase::Authenticated);
        assert_eq!(session.access_token(), Some("tok_123"));

        let restored = Session::restore(temp_store(&dir));
        assert_eq!(restored.phase(), Phase::Authenticated);
        assert_eq!(restored.access_token(), Some("tok_123"));
    }

    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let mut session = Session::restore(store.clone());
        session.establish("tok_123".to_string()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_clear_prevents_later_restore() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let mut session = Session::restore(store.clone());
        session.establish("tok_123".to_string()).unwrap();

        session.clear().unwrap();
        assert_eq!(session.phase(), Phase::Anonymous);
        assert_eq!(session.access_token(), None);
        assert!(!store.path().exists());

        let restored = Session::restore(store);
        assert!(!restored.is_established());
    }

    #[test]
    fn test_failed_clear_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let mut session = Session::restore(store.clone());
        session.establish("tok_123".to_string()).unwrap();

        // A directory in place of the file makes removal fail
        fs::remove_file(store.path()).unwrap();
        fs::create_dir(store.path()).unwrap();

        assert!(session.clear().is_err());
        assert_eq!(session.phase(), Phase::Authenticated);
        assert_eq!(session.access_token(), Some("tok_123"));
    }

    #[test]
    fn test_clear_without_session_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::restore(temp_store(&dir));
        session.clear().unwrap();
        assert_eq!(session.phase(), Phase::Anonymous);
    }

    #[test]
    fn test_abort_login_returns_to_previous_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::restore(temp_store(&dir));

        session.begin_login();
        session.abort_login();
        assert_eq!(session.phase(), Phase::Anonymous);

        session.establish("tok_123".to_string()).unwrap();
        session.begin_login();
        session.abort_login();
        assert_eq!(session.phase(), Phase::Authenticated);
    }

    #[test]
    fn test_corrupt_session_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        let session = Session::restore(store);
        assert_eq!(session.phase(), Phase::Anonymous);
    }
}
