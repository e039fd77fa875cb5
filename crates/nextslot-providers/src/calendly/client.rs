//! Calendly API client.
//!
//! This module provides a low-level HTTP client for the Calendly v2 API,
//! handling authentication, request building, and response parsing.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use nextslot_core::to_api_timestamp;

use crate::error::{ProviderError, ProviderResult};
use crate::model::{Account, EventType, ScheduledEvent, Slot};

use super::config::CalendlyConfig;

/// Prefix of canonical event type URIs, independent of the configured endpoint.
pub const EVENT_TYPE_URI_PREFIX: &str = "https://api.calendly.com/event_types";

type Query = Vec<(&'static str, String)>;

/// Calendly API client.
#[derive(Debug)]
pub struct CalendlyClient {
    http_client: reqwest::Client,
    config: CalendlyConfig,
}

impl CalendlyClient {
    /// Creates a new client from a validated configuration.
    pub fn new(config: CalendlyConfig) -> ProviderResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
                    .with_source(e)
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// `GET /users/me`
    pub async fn current_user(&self) -> ProviderResult<Account> {
        let envelope: ResourceEnvelope<Account> = self.get("/users/me", Vec::new()).await?;
        Ok(envelope.resource)
    }

    /// `GET /event_types`
    pub async fn event_types(&self, user_uri: Option<&str>) -> ProviderResult<Vec<EventType>> {
        let envelope: CollectionEnvelope<EventType> =
            self.get("/event_types", event_types_query(user_uri)).await?;
        Ok(envelope.collection)
    }

    /// `GET /scheduled_events`
    pub async fn scheduled_events(
        &self,
        user_uri: &str,
        min_start: Option<DateTime<Utc>>,
        max_start: Option<DateTime<Utc>>,
    ) -> ProviderResult<Vec<ScheduledEvent>> {
        let query = scheduled_events_query(user_uri, min_start, max_start);
        let envelope: CollectionEnvelope<ScheduledEvent> =
            self.get("/scheduled_events", query).await?;
        Ok(envelope.collection)
    }

    /// `GET /event_type_available_times`
    pub async fn event_type_available_times(
        &self,
        event_type_uri: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ProviderResult<Vec<Slot>> {
        let query = available_times_query(event_type_uri, start, end)?;
        let envelope: CollectionEnvelope<Slot> =
            self.get("/event_type_available_times", query).await?;
        Ok(envelope.collection)
    }

    /// Issues one authenticated GET and parses the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> ProviderResult<T> {
        let url = self.config.endpoint(path);
        debug!(url = %url, ?query, "requesting");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timeout".to_string()
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                ProviderError::network(message).with_source(e)
            })?;

        check_status(response.status())?;

        let body = response.text().await.map_err(|e| {
            ProviderError::network(format!("failed to read response: {}", e)).with_source(e)
        })?;

        parse_body(&body)
    }
}

/// Maps any non-success status to a request error.
fn check_status(status: StatusCode) -> ProviderResult<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(ProviderError::request_failed(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
    ))
}

fn parse_body<T: DeserializeOwned>(body: &str) -> ProviderResult<T> {
    serde_json::from_str(body).map_err(|e| {
        ProviderError::invalid_response(format!("failed to parse response: {}", e)).with_source(e)
    })
}

/// Recomposes an event type reference into its canonical URI.
///
/// Only the trailing path segment is kept, so URIs differing in host or
/// prefix resolve to the same reference. Query strings, fragments and
/// trailing slashes are ignored.
pub fn canonical_event_type_uri(event_type_uri: &str) -> ProviderResult<String> {
    let path = event_type_uri
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    match path.rsplit('/').next() {
        Some(id) if !id.is_empty() => Ok(format!("{}/{}", EVENT_TYPE_URI_PREFIX, id)),
        _ => Err(ProviderError::bad_request(format!(
            "event type URI has no identifier: {:?}",
            event_type_uri
        ))),
    }
}

fn event_types_query(user_uri: Option<&str>) -> Query {
    user_uri
        .map(|uri| vec![("user", uri.to_string())])
        .unwrap_or_default()
}

fn scheduled_events_query(
    user_uri: &str,
    min_start: Option<DateTime<Utc>>,
    max_start: Option<DateTime<Utc>>,
) -> Query {
    let mut query = vec![("user", user_uri.to_string())];
    if let Some(min) = min_start {
        query.push(("min_start_time", to_api_timestamp(min)));
    }
    if let Some(max) = max_start {
        query.push(("max_start_time", to_api_timestamp(max)));
    }
    query
}

fn available_times_query(
    event_type_uri: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> ProviderResult<Query> {
    Ok(vec![
        ("event_type", canonical_event_type_uri(event_type_uri)?),
        ("start_time", to_api_timestamp(start)),
        ("end_time", to_api_timestamp(end)),
    ])
}

/// Single-record response body, e.g. `/users/me`.
#[derive(Debug, Deserialize)]
struct ResourceEnvelope<T> {
    resource: T,
}

/// List response body. Pagination is ignored; only the first page is used.
#[derive(Debug, Deserialize)]
struct CollectionEnvelope<T> {
    collection: Vec<T>,
}
