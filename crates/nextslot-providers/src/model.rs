//! Typed records returned by scheduling providers.
//!
//! These are validated at the provider boundary: a record missing a required
//! field or carrying a malformed timestamp fails deserialization instead of
//! being passed along loosely typed. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated identity on whose behalf lookups are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account URI, used as the `user` lookup key.
    pub uri: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// IANA timezone configured on the account.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Public booking page.
    #[serde(default)]
    pub scheduling_url: Option<String>,
}

impl Account {
    /// Creates an account with only its URI set.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            email: None,
            timezone: None,
            scheduling_url: None,
        }
    }
}

/// A bookable meeting template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Event type URI.
    pub uri: String,
    /// Human-readable name, e.g. "Introduction Meeting".
    pub name: String,
    /// Whether the event type currently accepts bookings.
    pub active: bool,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Meeting length in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Kind, e.g. "solo" or "group".
    #[serde(default)]
    pub kind: Option<String>,
    /// Public booking page for this event type.
    #[serde(default)]
    pub scheduling_url: Option<String>,
}

impl EventType {
    /// Creates an event type with the required fields set.
    pub fn new(uri: impl Into<String>, name: impl Into<String>, active: bool) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            active,
            slug: None,
            duration: None,
            kind: None,
            scheduling_url: None,
        }
    }

    /// Returns "Active" or "Inactive".
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// One open start time for booking an event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Start of the bookable interval.
    pub start_time: DateTime<Utc>,
    /// Availability status reported by the provider, e.g. "available".
    #[serde(default)]
    pub status: Option<String>,
    /// Seats left for group event types.
    #[serde(default)]
    pub invitees_remaining: Option<u32>,
    /// Direct booking link for this slot.
    #[serde(default)]
    pub scheduling_url: Option<String>,
}

impl Slot {
    /// Creates a slot starting at `start_time`.
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            status: None,
            invitees_remaining: None,
            scheduling_url: None,
        }
    }
}

/// A meeting that has already been booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Scheduled event URI.
    pub uri: String,
    /// Event name, usually the event type name.
    #[serde(default)]
    pub name: Option<String>,
    /// "active" or "canceled".
    #[serde(default)]
    pub status: Option<String>,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// End instant.
    pub end_time: DateTime<Utc>,
    /// URI of the event type this was booked from.
    #[serde(default)]
    pub event_type: Option<String>,
}
