//! Integration tests for the session lifecycle
//!
//! These exercise the file-backed session store through the public context
//! API. Network IO is never performed: the base URL points at an address
//! nothing listens on, and every path tested resolves locally.

use std::sync::Arc;

use tempfile::TempDir;

use fintrack_core::adapters::JsonFileStore;
use fintrack_core::config::Config;
use fintrack_core::ports::SessionStore;
use fintrack_core::{AuthUser, FintrackContext, Session};

fn test_user() -> AuthUser {
    AuthUser {
        id: "u-1".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        avatar: None,
    }
}

fn test_context(dir: &TempDir) -> FintrackContext {
    let store = Arc::new(JsonFileStore::new(dir.path().join("session.json")));
    FintrackContext::new(Config::with_base_url("http://127.0.0.1:9/api"), store)
        .expect("Failed to create context")
}

#[test]
fn test_session_persists_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let writer = JsonFileStore::new(&path);
    writer.set(&Session::new("tok-abc", test_user())).unwrap();

    let reader = JsonFileStore::new(&path);
    let session = reader.get().unwrap().unwrap();
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.user.username, "ada");
}

#[test]
fn test_context_shares_one_store() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    ctx.session.set(&Session::new("tok-abc", test_user())).unwrap();

    // The same file read through a fresh store sees the session.
    let reader = JsonFileStore::new(dir.path().join("session.json"));
    assert!(reader.get().unwrap().is_some());
}

#[tokio::test]
async fn test_logout_then_current_user_is_none() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    ctx.session.set(&Session::new("tok-abc", test_user())).unwrap();
    ctx.auth.logout().unwrap();

    // No token cached: resolves to None without touching the network.
    assert_eq!(ctx.auth.current_user().await, None);
    assert_eq!(ctx.session.get().unwrap(), None);
}

#[tokio::test]
async fn test_current_user_on_fresh_install_is_none() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    assert_eq!(ctx.auth.current_user().await, None);
}

#[test]
fn test_logout_without_session_succeeds() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    ctx.auth.logout().unwrap();
}
