//! Client configuration

use super::environment::Environment;
use std::time::Duration;
use url::Url;

/// Fixed timeout applied to every gateway request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum number of redirects followed per request
pub const MAX_REDIRECTS: usize = 10;

/// Gateway client configuration
///
/// Resolved once when the client is built and never mutated afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant API key, sent as a bearer token
    pub api_key: String,
    /// API base URL, ending with `/`
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Redirect limit
    pub max_redirects: usize,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_redirects", &self.max_redirects)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client config for the given environment
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: environment.base_url().to_string(),
            timeout: REQUEST_TIMEOUT,
            max_redirects: MAX_REDIRECTS,
        }
    }

    /// Override the base URL resolved from the environment
    ///
    /// A trailing `/` is appended when missing so endpoints can be concatenated.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Validate the client configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(crate::UtrustError::config("API key cannot be empty"));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            crate::UtrustError::config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(crate::UtrustError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Full URL for an endpoint relative to the base URL
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
