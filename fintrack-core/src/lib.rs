//! Fintrack Core - authenticated client for the fintrack backend
//!
//! This crate implements the API-access layer following hexagonal
//! architecture:
//!
//! - **domain**: wire entities (AuthUser, Transaction, Target, summaries)
//! - **ports**: trait definitions for external dependencies (SessionStore)
//! - **adapters**: concrete implementations (JSON file store, memory store)
//! - **api**: the shared HTTP client and the per-domain API modules
//!
//! The backend itself is an opaque HTTP collaborator: nothing is cached
//! locally except the (token, user) session pair, and every read is a
//! fresh round trip.

pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod ports;

use std::sync::Arc;

use api::{ApiClient, AuthApi, MonthlyDataApi, TargetApi, TransactionApi};
use config::Config;
use ports::SessionStore;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    AuthUser, AvailableMonth, MonthlySummary, NewTarget, NewTransaction, Session, Target,
    TargetPatch, Transaction, TransactionKind, TransactionPatch,
};

/// Main context for fintrack operations
///
/// This is the primary entry point: it holds the configuration, the
/// session store, and the per-domain API modules, all sharing one HTTP
/// client.
pub struct FintrackContext {
    pub config: Config,
    pub session: Arc<dyn SessionStore>,
    pub auth: AuthApi,
    pub transactions: TransactionApi,
    pub targets: TargetApi,
    pub monthly: MonthlyDataApi,
}

impl FintrackContext {
    /// Create a new fintrack context
    pub fn new(config: Config, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&config, Arc::clone(&session))?);

        let auth = AuthApi::new(Arc::clone(&client), Arc::clone(&session));
        let transactions = TransactionApi::new(Arc::clone(&client));
        let targets = TargetApi::new(Arc::clone(&client));
        let monthly = MonthlyDataApi::new(Arc::clone(&client));

        Ok(Self {
            config,
            session,
            auth,
            transactions,
            targets,
            monthly,
        })
    }
}
