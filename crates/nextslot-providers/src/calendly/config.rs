//! Calendly provider configuration.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{ProviderError, ProviderResult};

/// Base URL of the Calendly v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.calendly.com";

/// Environment variable conventionally holding the personal access token.
pub const API_KEY_ENV: &str = "CALENDLY_API_KEY";

/// Default HTTP timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Calendly provider.
///
/// Built once by the caller and handed to
/// [`CalendlyProvider::new`](super::CalendlyProvider::new); the provider never
/// reads the environment itself.
#[derive(Clone)]
pub struct CalendlyConfig {
    /// Personal access token or OAuth access token.
    pub api_key: String,
    /// API endpoint. Overridable for proxies and tests.
    pub base_url: Url,
    /// Transport timeout per request.
    pub timeout: Duration,
}

impl CalendlyConfig {
    /// Creates a configuration for the public API with the given token.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builder method to set the API endpoint.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Builder method to set the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a blank token or a non-HTTP endpoint.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::configuration(format!(
                "{} environment variable is required",
                API_KEY_ENV
            )));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ProviderError::configuration(format!(
                "unsupported base_url scheme: {}",
                self.base_url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(ProviderError::configuration("timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the endpoint URL for an API path such as `/users/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default base URL")
}

impl fmt::Debug for CalendlyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendlyConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
