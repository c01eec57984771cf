//! Shared HTTP client
//!
//! One client per context, bound to the backend base URL. Every request
//! passes through here: the bearer token is attached when a session is
//! cached, non-success statuses become errors, and 401 replies are logged
//! without touching the cached session.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::ports::SessionStore;

/// Header telling the backend not to redirect on an auth failure
pub const SKIP_REDIRECT_HEADER: &str = "X-Skip-Redirect";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-request behavior flags
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestFlags {
    /// An unauthorized reply is an expected outcome for this call.
    /// Adds the skip-redirect header and demotes the 401 diagnostic.
    pub tolerate_unauthorized: bool,
}

impl RequestFlags {
    pub fn tolerant() -> Self {
        Self {
            tolerate_unauthorized: true,
        }
    }
}

/// Shared HTTP client for the fintrack backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client bound to the configured base URL
    pub fn new(config: &Config, session: Arc<dyn SessionStore>) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|err| Error::config(format!("invalid base URL {:?}: {err}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        tracing::debug!(base_url = %config.base_url, "API client created");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Base URL this client is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current bearer token, if a session is cached.
    ///
    /// A store read failure is logged and treated as "no session", so the
    /// request goes out unauthenticated instead of failing locally.
    fn bearer_token(&self) -> Option<String> {
        match self.session.get() {
            Ok(session) => session.map(|s| s.token),
            Err(err) => {
                tracing::warn!(error = %err, "session store read failed, sending request unauthenticated");
                None
            }
        }
    }

    /// Build a request for `path` with auth and per-request flags applied
    pub(crate) fn prepare(&self, method: Method, path: &str, flags: RequestFlags) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, normalize_path(path));
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if flags.tolerate_unauthorized {
            builder = builder.header(SKIP_REDIRECT_HEADER, "true");
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, flags: RequestFlags) -> Result<Response> {
        let response = builder.send().await?;
        self.check_status(response, flags).await
    }

    /// Map non-success statuses to errors. A 401 is observed and logged
    /// but the cached session is left intact; whether to force a logout
    /// is the caller's decision.
    async fn check_status(&self, response: Response, flags: RequestFlags) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            let url = response.url().clone();
            if flags.tolerate_unauthorized {
                tracing::debug!(%url, "unauthorized reply on a call that tolerates it");
            } else {
                tracing::warn!(%url, "unauthorized reply, session left intact");
            }
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::api(status.as_u16(), message))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(response.json::<T>().await?)
    }

    /// GET `path`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with(path, &[], RequestFlags::default()).await
    }

    /// GET `path` with query parameters and per-request flags
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        flags: RequestFlags,
    ) -> Result<T> {
        let builder = self.prepare(Method::GET, path, flags).query(query);
        let response = self.send(builder, flags).await?;
        Self::parse(response).await
    }

    /// POST `body` as JSON to `path`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let flags = RequestFlags::default();
        let builder = self.prepare(Method::POST, path, flags).json(body);
        let response = self.send(builder, flags).await?;
        Self::parse(response).await
    }

    /// PUT `body` as JSON to `path`
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let flags = RequestFlags::default();
        let builder = self.prepare(Method::PUT, path, flags).json(body);
        let response = self.send(builder, flags).await?;
        Self::parse(response).await
    }

    /// DELETE `path`; the response body is discarded
    pub async fn delete(&self, path: &str) -> Result<()> {
        let flags = RequestFlags::default();
        let builder = self.prepare(Method::DELETE, path, flags);
        self.send(builder, flags).await?;
        Ok(())
    }

    /// POST a multipart form to `path`
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let flags = RequestFlags::default();
        let builder = self.prepare(Method::POST, path, flags).multipart(form);
        let response = self.send(builder, flags).await?;
        Self::parse(response).await
    }
}

/// Normalize `path` to exactly one leading slash
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::{AuthUser, Session};
    use reqwest::header::AUTHORIZATION;

    fn test_user() -> AuthUser {
        AuthUser {
            id: "u-1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar: None,
        }
    }

    fn test_client(session: Arc<dyn SessionStore>) -> ApiClient {
        ApiClient::new(&Config::with_base_url("http://localhost:5000/api"), session).unwrap()
    }

    #[test]
    fn test_normalize_path_adds_leading_slash() {
        assert_eq!(normalize_path("transactions"), "/transactions");
    }

    #[test]
    fn test_normalize_path_keeps_single_slash() {
        assert_eq!(normalize_path("/transactions"), "/transactions");
        assert_eq!(normalize_path("//transactions"), "/transactions");
    }

    #[test]
    fn test_both_path_spellings_hit_same_target() {
        let client = test_client(Arc::new(MemoryStore::new()));
        let bare = client
            .prepare(Method::GET, "transactions", RequestFlags::default())
            .build()
            .unwrap();
        let slashed = client
            .prepare(Method::GET, "/transactions", RequestFlags::default())
            .build()
            .unwrap();
        assert_eq!(bare.url().as_str(), slashed.url().as_str());
        assert_eq!(
            bare.url().as_str(),
            "http://localhost:5000/api/transactions"
        );
    }

    #[test]
    fn test_bearer_header_attached_when_session_cached() {
        let store = Arc::new(MemoryStore::new());
        store.set(&Session::new("tok-123", test_user())).unwrap();

        let client = test_client(store);
        let request = client
            .prepare(Method::GET, "/transactions", RequestFlags::default())
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn test_no_bearer_header_without_session() {
        let client = test_client(Arc::new(MemoryStore::new()));
        let request = client
            .prepare(Method::GET, "/transactions", RequestFlags::default())
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_tolerant_requests_carry_skip_redirect_header() {
        let client = test_client(Arc::new(MemoryStore::new()));
        let request = client
            .prepare(Method::GET, "/protected", RequestFlags::tolerant())
            .build()
            .unwrap();

        assert_eq!(request.headers().get(SKIP_REDIRECT_HEADER).unwrap(), "true");
    }

    #[test]
    fn test_default_requests_omit_skip_redirect_header() {
        let client = test_client(Arc::new(MemoryStore::new()));
        let request = client
            .prepare(Method::GET, "/transactions", RequestFlags::default())
            .build()
            .unwrap();

        assert!(request.headers().get(SKIP_REDIRECT_HEADER).is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(
            &Config::with_base_url("http://localhost:5000/api/"),
            Arc::new(MemoryStore::new()),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ApiClient::new(
            &Config::with_base_url("not a url"),
            Arc::new(MemoryStore::new()),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
