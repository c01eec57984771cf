//! Session store port - local session persistence abstraction

use crate::domain::result::Result;
use crate::domain::Session;

/// Local persistence for the (token, user) pair.
///
/// Implementations hold at most one session at a time and treat the pair
/// as a unit: token and user are written together and cleared together,
/// so the store never holds one without the other.
pub trait SessionStore: Send + Sync {
    /// Replace the stored session with `session`
    fn set(&self, session: &Session) -> Result<()>;

    /// Read the stored session; `None` means logged out
    fn get(&self) -> Result<Option<Session>>;

    /// Remove the stored session. Clearing an absent session is not an error.
    fn clear(&self) -> Result<()>;
}
