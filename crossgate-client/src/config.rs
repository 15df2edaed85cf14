//! Client configuration

/// Versioned API root appended to the server origin.
pub const API_ROOT: &str = "/api/v1";

/// Fixed request timeout (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for connecting to the governance backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server origin (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a configuration with the default 10 s timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full API root URL (origin + versioned prefix, no trailing slash).
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_ROOT)
    }
}
