//! Core domain entities
//!
//! Wire shapes for the backend contract. Validation is the backend's
//! responsibility; these are pure data structures with no I/O.

mod session;
mod summary;
mod target;
mod transaction;
mod user;
pub mod result;

pub use session::Session;
pub use summary::{AvailableMonth, MonthlySummary};
pub use target::{NewTarget, Target, TargetPatch};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
pub use user::AuthUser;
