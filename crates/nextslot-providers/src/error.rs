//! Error types for scheduling provider operations.
//!
//! Every failure talking to the scheduling API is reported as a
//! [`ProviderError`] tagged with a [`ProviderErrorCode`]. Callers never retry;
//! the error is surfaced to the outermost boundary as-is.

use std::fmt;
use thiserror::Error;

/// The category of a provider error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorCode {
    /// The API answered with a non-success HTTP status.
    RequestFailed,
    /// Network error - connection failed, timeout, body could not be read.
    NetworkError,
    /// The response body did not have the expected shape.
    InvalidResponse,
    /// The request could not be built from the given arguments.
    BadRequest,
    /// Configuration error - missing credential or unusable endpoint.
    ConfigurationError,
}

impl ProviderErrorCode {
    /// Returns a machine-readable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestFailed => "request_failed",
            Self::NetworkError => "network_error",
            Self::InvalidResponse => "invalid_response",
            Self::BadRequest => "bad_request",
            Self::ConfigurationError => "configuration_error",
        }
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while interacting with a scheduling provider.
#[derive(Debug, Error)]
pub struct ProviderError {
    code: ProviderErrorCode,
    message: String,
    /// HTTP status, set for [`ProviderErrorCode::RequestFailed`].
    status: Option<u16>,
    /// The provider that generated this error (e.g., "calendly").
    provider: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Creates a new provider error with the given code and message.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            provider: None,
            source: None,
        }
    }

    /// Creates a request error for a non-success HTTP status.
    ///
    /// The message reads `Calendly API error: <status> <reason>`.
    pub fn request_failed(status: u16, reason: impl AsRef<str>) -> Self {
        let reason = reason.as_ref();
        let message = if reason.is_empty() {
            format!("Calendly API error: {}", status)
        } else {
            format!("Calendly API error: {} {}", status, reason)
        };
        let mut err = Self::new(ProviderErrorCode::RequestFailed, message);
        err.status = Some(status);
        err
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::NetworkError, message)
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InvalidResponse, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::BadRequest, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::ConfigurationError, message)
    }

    /// Sets the provider name for this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Copies this error without its source.
    ///
    /// The boxed source is not `Clone`, so it is dropped.
    pub fn without_source(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            status: self.status,
            provider: self.provider.clone(),
            source: None,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ProviderErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the provider name, if set.
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns true for a missing or unusable configuration.
    pub fn is_configuration(&self) -> bool {
        self.code == ProviderErrorCode::ConfigurationError
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref provider) = self.provider {
            write!(f, "[{}] ", provider)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
