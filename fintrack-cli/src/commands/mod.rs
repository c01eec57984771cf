//! CLI command implementations

pub mod login;
pub mod logout;
pub mod months;
pub mod register;
pub mod summary;
pub mod targets;
pub mod transactions;
pub mod whoami;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use fintrack_core::adapters::JsonFileStore;
use fintrack_core::config::Config;
use fintrack_core::FintrackContext;

/// Get the fintrack directory from environment or default
pub fn get_fintrack_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FINTRACK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".fintrack")
    }
}

/// Get or create the fintrack context
pub fn get_context() -> Result<FintrackContext> {
    let dir = get_fintrack_dir();

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create fintrack directory: {:?}", dir))?;

    let session = Arc::new(JsonFileStore::new(dir.join("session.json")));
    FintrackContext::new(Config::from_env(), session)
        .context("Failed to initialize fintrack context")
}
