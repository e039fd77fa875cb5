//! SchedulingProvider trait definition.
//!
//! This module defines the [`SchedulingProvider`] trait, the seam between the
//! availability workflow and a concrete scheduling backend (Calendly).
//!
//! Providers are responsible for:
//! - Attaching credentials to every request
//! - Translating logical lookups into API calls
//! - Reporting any non-success answer as a [`ProviderError`](crate::ProviderError)

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::error::ProviderResult;
use crate::model::{Account, EventType, ScheduledEvent, Slot};

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe, so callers can hold a
/// `&dyn SchedulingProvider`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The core abstraction for scheduling providers.
///
/// Every method issues at most one request and never retries. Only the
/// first page of any listing is returned.
pub trait SchedulingProvider: Send + Sync {
    /// Returns the name/type of this provider (e.g., "calendly").
    fn name(&self) -> &str;

    /// Fetches the authenticated account's own record.
    fn current_account(&self) -> BoxFuture<'_, ProviderResult<Account>>;

    /// Lists event types, scoped to `account_uri` when given.
    fn list_event_types<'a>(
        &'a self,
        account_uri: Option<&'a str>,
    ) -> BoxFuture<'a, ProviderResult<Vec<EventType>>>;

    /// Lists already scheduled events for an account, optionally bounded by
    /// start time.
    fn list_scheduled_events<'a>(
        &'a self,
        account_uri: &'a str,
        min_start: Option<DateTime<Utc>>,
        max_start: Option<DateTime<Utc>>,
    ) -> BoxFuture<'a, ProviderResult<Vec<ScheduledEvent>>>;

    /// Lists open slots for one event type inside `[start, end)`.
    ///
    /// `event_type_uri` may be any URI whose trailing path segment is the
    /// event type identifier. Sub-second precision of `start` and `end` is
    /// dropped.
    fn list_available_times<'a>(
        &'a self,
        event_type_uri: &'a str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'a, ProviderResult<Vec<Slot>>>;
}
