use std::fmt::{Debug, Formatter};

/// Default quote API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.alphavantage.co/query";

/// Default per-request timeout for the outbound API call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the remote quote API.
///
/// Built once at startup and handed to [`ApiClient`](crate::ApiClient); the
/// pipeline never reads the process environment itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_key: String,
    base_url: String,
    timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Debug for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
