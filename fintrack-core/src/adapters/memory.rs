//! In-memory session store

use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::domain::Session;
use crate::ports::SessionStore;

/// In-process session store, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>> {
        self.slot
            .lock()
            .map_err(|_| Error::store("session slot poisoned"))
    }
}

impl SessionStore for MemoryStore {
    fn set(&self, session: &Session) -> Result<()> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn get(&self) -> Result<Option<Session>> {
        Ok(self.lock()?.clone())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthUser;

    fn test_session() -> Session {
        Session::new(
            "tok-abc",
            AuthUser {
                id: "u-1".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                avatar: None,
            },
        )
    }

    #[test]
    fn test_starts_logged_out() {
        assert_eq!(MemoryStore::new().get().unwrap(), None);
    }

    #[test]
    fn test_set_get_clear() {
        let store = MemoryStore::new();
        let session = test_session();

        store.set(&session).unwrap();
        assert_eq!(store.get().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
