//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport failure, including response body decoding
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend replied with a non-success HTTP status
    #[error("server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Successful reply that is missing fields the contract requires
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("session store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a session store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// True for HTTP 401 replies
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::api(404, "no such transaction");
        assert_eq!(
            err.to_string(),
            "server returned HTTP 404: no such transaction"
        );
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(Error::api(401, "").is_unauthorized());
        assert!(!Error::api(500, "").is_unauthorized());
        assert!(!Error::invalid_response("missing token").is_unauthorized());
    }
}
