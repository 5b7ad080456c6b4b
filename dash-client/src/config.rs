//! Client configuration

/// Default backend URL when `DASH_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the marketplace backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DASH_API_URL | http://localhost:8080 | Backend base URL |
/// | DASH_API_TOKEN | (none) | Bearer token |
/// | DASH_REQUEST_TIMEOUT_SECS | 30 | Request timeout |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("DASH_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = lookup("DASH_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            token: lookup("DASH_API_TOKEN").filter(|v| !v.trim().is_empty()),
            timeout,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DASH_API_URL", "https://admin.example.com/api"),
            ("DASH_API_TOKEN", "secret"),
            ("DASH_REQUEST_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "https://admin.example.com/api");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DASH_REQUEST_TIMEOUT_SECS", "soon"),
            ("DASH_API_TOKEN", " "),
        ]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://backend").with_token("t").with_timeout(3);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout, 3);
    }
}
