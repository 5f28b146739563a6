//! File-backed session storage for the signed-in user.
//!
//! The session is a single JSON document holding a [`UserRef`]. A missing
//! file means "signed out"; a file that fails to decode is an error so the
//! caller can decide whether to discard it.

use std::path::{Path, PathBuf};

use crate::auth::UserRef;
use crate::error::Result;

/// File name of the session document inside the data directory.
pub const SESSION_FILE: &str = "session.json";

#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store the session at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store the session under `data_dir/session.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<UserRef>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let user: UserRef = serde_json::from_slice(&bytes)?;
        tracing::debug!(user = %user.id, "Loaded session from {:?}", self.path);
        Ok(Some(user))
    }

    /// Persist `user`, replacing any previous session.
    pub fn save(&self, user: &UserRef) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(user)?;
        // Readers only ever see a complete document.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::info!(user = %user.id, "Session saved");
        Ok(())
    }

    /// Remove the stored session. Clearing an absent session is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Access token of the stored user, if one was issued.
    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .load()?
            .and_then(|user| user.access_token().map(str::to_owned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthTokens;
    use crate::error::VoltError;

    #[test]
    fn missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(dir.path());
        assert!(store.load().unwrap().is_none());
        assert!(store.access_token().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(dir.path().join("nested"));

        let mut user = UserRef::new("u1", "u1@example.com");
        user.tokens = Some(AuthTokens {
            access: "abc".into(),
            refresh: None,
        });
        store.save(&user).unwrap();

        assert_eq!(store.load().unwrap(), Some(user));
        assert_eq!(store.access_token().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(dir.path());
        std::fs::write(store.path(), b"{not json").unwrap();
        assert!(matches!(store.load(), Err(VoltError::Serialization(_))));
    }
}
