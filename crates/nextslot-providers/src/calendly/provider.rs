//! Calendly provider implementation.
//!
//! This module implements the [`SchedulingProvider`] trait for Calendly.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::model::{Account, EventType, ScheduledEvent, Slot};
use crate::provider::{BoxFuture, SchedulingProvider};

use super::client::CalendlyClient;
use super::config::CalendlyConfig;

const PROVIDER_NAME: &str = "calendly";

/// Calendly scheduling provider.
///
/// Holds no state beyond the HTTP client; build a fresh one per invocation.
#[derive(Debug)]
pub struct CalendlyProvider {
    client: CalendlyClient,
}

impl CalendlyProvider {
    /// Creates a new Calendly provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the token is missing, before any
    /// request is made.
    pub fn new(config: CalendlyConfig) -> ProviderResult<Self> {
        config.validate()?;
        let client = CalendlyClient::new(config)?;
        Ok(Self { client })
    }
}

fn tag(err: ProviderError) -> ProviderError {
    err.with_provider(PROVIDER_NAME)
}

impl SchedulingProvider for CalendlyProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn current_account(&self) -> BoxFuture<'_, ProviderResult<Account>> {
        Box::pin(async move { self.client.current_user().await.map_err(tag) })
    }

    fn list_event_types<'a>(
        &'a self,
        account_uri: Option<&'a str>,
    ) -> BoxFuture<'a, ProviderResult<Vec<EventType>>> {
        Box::pin(async move {
            let event_types = self.client.event_types(account_uri).await.map_err(tag)?;
            debug!(count = event_types.len(), "fetched event types");
            Ok(event_types)
        })
    }

    fn list_scheduled_events<'a>(
        &'a self,
        account_uri: &'a str,
        min_start: Option<DateTime<Utc>>,
        max_start: Option<DateTime<Utc>>,
    ) -> BoxFuture<'a, ProviderResult<Vec<ScheduledEvent>>> {
        Box::pin(async move {
            self.client
                .scheduled_events(account_uri, min_start, max_start)
                .await
                .map_err(tag)
        })
    }

    fn list_available_times<'a>(
        &'a self,
        event_type_uri: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'a, ProviderResult<Vec<Slot>>> {
        Box::pin(async move {
            let slots = self
                .client
                .event_type_available_times(event_type_uri, start, end)
                .await
                .map_err(tag)?;
            debug!(count = slots.len(), "fetched available times");
            Ok(slots)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;

    #[test]
    fn missing_key_fails_before_any_request() {
        let err = CalendlyProvider::new(CalendlyConfig::new("")).unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);
    }

    #[test]
    fn provider_name() {
        let provider = CalendlyProvider::new(CalendlyConfig::new("token")).unwrap();
        assert_eq!(provider.name(), "calendly");
    }

    #[tokio::test]
    async fn bad_event_type_uri_fails_without_request() {
        // Unroutable endpoint: reaching the network would fail differently.
        let config = CalendlyConfig::new("token")
            .with_base_url(url::Url::parse("http://127.0.0.1:9").unwrap());
        let provider = CalendlyProvider::new(config).unwrap();

        let now = Utc::now();
        let err = provider
            .list_available_times("/", now, now)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::BadRequest);
        assert_eq!(err.provider(), Some("calendly"));
    }
}
