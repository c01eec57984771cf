//! File-backed session store
//!
//! Persists the session as a small JSON document with two fixed keys,
//! `fintrackToken` holding the bearer token and `fintrackUser` holding the
//! user record serialized to text.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::{AuthUser, Session};
use crate::ports::SessionStore;

/// On-disk shape: two optional text slots under fixed keys
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fintrack_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fintrack_user: Option<String>,
}

/// Session store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreFile::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_file(&self, file: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(file)?)?;
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn set(&self, session: &Session) -> Result<()> {
        let file = StoreFile {
            fintrack_token: Some(session.token.clone()),
            fintrack_user: Some(serde_json::to_string(&session.user)?),
        };
        self.write_file(&file)?;
        tracing::debug!(path = %self.path.display(), "session written");
        Ok(())
    }

    fn get(&self) -> Result<Option<Session>> {
        let file = self.read_file()?;
        match (file.fintrack_token, file.fintrack_user) {
            (Some(token), Some(user)) => {
                let user: AuthUser = serde_json::from_str(&user)?;
                Ok(Some(Session::new(token, user)))
            }
            // A lone token or user is a torn write; report logged out.
            _ => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_user() -> AuthUser {
        AuthUser {
            id: "u-1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: None,
        }
    }

    fn test_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let session = Session::new("tok-abc", test_user());
        store.set(&session).unwrap();

        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_get_without_file_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_clear_removes_both_slots() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.set(&Session::new("tok-abc", test_user())).unwrap();
        store.clear().unwrap();

        assert_eq!(store.get().unwrap(), None);
        assert!(!dir.path().join("session.json").exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_file_uses_fixed_keys() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.set(&Session::new("tok-abc", test_user())).unwrap();

        let content = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
        assert!(content.contains("fintrackToken"));
        assert!(content.contains("fintrackUser"));
    }

    #[test]
    fn test_lone_token_reads_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"fintrackToken": "tok-abc"}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.get().is_err());
    }

    #[test]
    fn test_set_replaces_previous_session() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.set(&Session::new("tok-old", test_user())).unwrap();
        let newer = Session::new("tok-new", test_user().with_avatar("/a.png"));
        store.set(&newer).unwrap();

        assert_eq!(store.get().unwrap(), Some(newer));
    }
}
