//! Test doubles for code written against [`SchedulingProvider`].
//!
//! Compiled for this crate's tests and, in dependent crates, through the
//! `testing` feature.

use chrono::{DateTime, Utc};

use crate::error::{ProviderError, ProviderResult};
use crate::model::{Account, EventType, ScheduledEvent, Slot};
use crate::provider::{BoxFuture, SchedulingProvider};

/// A provider that always returns an error.
///
/// Stands in for a backend that cannot be reached.
#[derive(Debug)]
pub struct ErrorProvider {
    name: String,
    error: ProviderError,
}

impl ErrorProvider {
    /// Creates a new error provider.
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    fn fail<T: Send + 'static>(&self) -> BoxFuture<'_, ProviderResult<T>> {
        let error = self.error.without_source().with_provider(&self.name);
        Box::pin(async move { Err(error) })
    }
}

impl SchedulingProvider for ErrorProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn current_account(&self) -> BoxFuture<'_, ProviderResult<Account>> {
        self.fail()
    }

    fn list_event_types<'a>(
        &'a self,
        _account_uri: Option<&'a str>,
    ) -> BoxFuture<'a, ProviderResult<Vec<EventType>>> {
        self.fail()
    }

    fn list_scheduled_events<'a>(
        &'a self,
        _account_uri: &'a str,
        _min_start: Option<DateTime<Utc>>,
        _max_start: Option<DateTime<Utc>>,
    ) -> BoxFuture<'a, ProviderResult<Vec<ScheduledEvent>>> {
        self.fail()
    }

    fn list_available_times<'a>(
        &'a self,
        _event_type_uri: &'a str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> BoxFuture<'a, ProviderResult<Vec<Slot>>> {
        self.fail()
    }
}
