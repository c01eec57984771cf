//! Backend API modules
//!
//! Each module maps a small set of domain operations onto REST calls
//! through the shared client. [`AuthApi`] additionally maintains the
//! session store; the others hold no state at all.

pub mod auth;
pub mod client;
pub mod monthly;
pub mod targets;
pub mod transactions;

pub use auth::AuthApi;
pub use client::{ApiClient, RequestFlags, SKIP_REDIRECT_HEADER};
pub use monthly::MonthlyDataApi;
pub use targets::TargetApi;
pub use transactions::TransactionApi;
