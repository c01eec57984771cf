//! Authentication API
//!
//! The one module that also maintains the session store: login and signup
//! persist the (token, user) pair, logout removes it, and avatar uploads
//! refresh the cached user record.

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, RequestFlags};
use crate::domain::result::{Error, Result};
use crate::domain::{AuthUser, Session};
use crate::ports::SessionStore;

/// Reply to login and signup calls
#[derive(Debug, Deserialize)]
struct AuthReply {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
}

/// Reply to avatar uploads: a full user, or just the new reference
#[derive(Debug, Deserialize)]
struct AvatarReply {
    #[serde(default)]
    user: Option<AuthUser>,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Authentication operations
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
}

impl AuthApi {
    pub(crate) fn new(client: Arc<ApiClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { client, session }
    }

    /// Register a new account with a profile picture.
    ///
    /// On success the returned (token, user) pair becomes the cached
    /// session. A reply missing either field fails without touching the
    /// cache; backend and transport errors propagate unchanged.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        avatar: &Path,
    ) -> Result<AuthUser> {
        let form = Form::new()
            .text("username", username.to_string())
            .text("email", email.to_string())
            .text("password", password.to_string())
            .part("avatar", file_part(avatar).await?);

        tracing::debug!(username, email, "registering user");
        let reply: AuthReply = self.client.post_multipart("/signup", form).await?;
        self.store_credentials(reply)
    }

    /// Log in with email and password. Same contract as [`Self::register`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        tracing::debug!(email, "logging in");
        let reply: AuthReply = self
            .client
            .post("/login", &LoginPayload { email, password })
            .await?;
        self.store_credentials(reply)
    }

    /// Drop the cached session.
    ///
    /// A failed clear is attempted once more before the original error is
    /// returned.
    pub fn logout(&self) -> Result<()> {
        tracing::debug!("logging out, clearing session");
        if let Err(err) = self.session.clear() {
            let _ = self.session.clear();
            return Err(err);
        }
        Ok(())
    }

    /// Fetch the user for the cached token.
    ///
    /// Absence of a session is a normal outcome here, not an error: with
    /// no cached token this returns `None` without a network call, and any
    /// backend or transport failure also yields `None`.
    pub async fn current_user(&self) -> Option<AuthUser> {
        match self.session.get() {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!("no cached token, skipping current-user call");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "session store read failed");
                return None;
            }
        }

        match self
            .client
            .get_with::<AuthUser>("/protected", &[], RequestFlags::tolerant())
            .await
        {
            Ok(user) => Some(user),
            Err(err) => {
                if err.is_unauthorized() {
                    tracing::debug!("cached token rejected by the backend");
                } else {
                    tracing::debug!(error = %err, "current-user call failed");
                }
                None
            }
        }
    }

    /// Upload a new profile picture and refresh the cached user
    pub async fn upload_avatar(&self, file: &Path) -> Result<AuthUser> {
        let form = Form::new().part("avatar", file_part(file).await?);

        tracing::debug!(file = %file.display(), "uploading avatar");
        let reply: AvatarReply = self.client.post_multipart("/upload-avatar", form).await?;
        self.apply_avatar_reply(reply)
    }

    /// Persist a (token, user) reply; both fields must be present
    fn store_credentials(&self, reply: AuthReply) -> Result<AuthUser> {
        match (reply.token, reply.user) {
            (Some(token), Some(user)) => {
                self.session.set(&Session::new(token, user.clone()))?;
                tracing::debug!(username = %user.username, "session cached");
                Ok(user)
            }
            _ => Err(Error::invalid_response("auth reply missing token or user")),
        }
    }

    /// Apply an avatar reply to the cached session
    fn apply_avatar_reply(&self, reply: AvatarReply) -> Result<AuthUser> {
        if let Some(user) = reply.user {
            // Full user replaces the cached record, token kept as-is.
            if let Some(session) = self.session.get()? {
                self.session.set(&Session::new(session.token, user.clone()))?;
            }
            return Ok(user);
        }
        if let Some(avatar) = reply.avatar {
            let session = self
                .session
                .get()?
                .ok_or_else(|| Error::invalid_response("no cached user to attach the avatar to"))?;
            let user = session.user.with_avatar(avatar);
            self.session.set(&Session::new(session.token, user.clone()))?;
            return Ok(user);
        }
        Err(Error::invalid_response(
            "avatar reply missing both user and avatar",
        ))
    }
}

/// Multipart part for a local file
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "avatar".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}
