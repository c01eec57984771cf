//! Configuration
//!
//! The client is bound to a single backend base URL, taken from the
//! environment with a hard-coded production fallback.

/// Default production API URL
const PRODUCTION_API_URL: &str = "https://fintrack-backend-production.up.railway.app/api";

/// Environment variable to override the backend base URL.
/// Set this to point at a local or staging backend.
pub const API_URL_ENV: &str = "FINTRACK_API_URL";

/// Get the backend base URL, checking the environment variable first
pub fn get_base_url() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| PRODUCTION_API_URL.to_string())
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        Self {
            base_url: get_base_url(),
        }
    }

    /// Configuration pinned to a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        // When FINTRACK_API_URL is not set, should use production
        std::env::remove_var(API_URL_ENV);
        let url = get_base_url();
        assert_eq!(url, PRODUCTION_API_URL);
    }

    #[test]
    fn test_pinned_base_url() {
        let config = Config::with_base_url("http://localhost:5000/api");
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }
}
