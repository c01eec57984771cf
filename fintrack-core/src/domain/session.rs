//! Cached session pair

use serde::{Deserialize, Serialize};

use super::AuthUser;

/// The (token, user) pair representing a logged-in session.
///
/// The token is an opaque bearer credential; a request counts as
/// authenticated iff a session is present in the store at send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: AuthUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
