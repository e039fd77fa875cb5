//! SchedulingProvider trait and implementations.
//!
//! This crate provides the gateway between the availability workflow and a
//! scheduling backend:
//!
//! - [`SchedulingProvider`] - The trait every backend implements
//! - [`Account`], [`EventType`], [`Slot`], [`ScheduledEvent`] - Typed records
//! - [`ProviderError`] - Error types for provider operations
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Calendly API    │
//! └────────┬─────────┘
//!          │ bearer token, JSON
//!          ▼
//! ┌──────────────────┐
//! │ CalendlyProvider │
//! └────────┬─────────┘
//!          │ SchedulingProvider
//!          ▼
//! ┌──────────────────────────────┐
//! │ Account / EventType / Slot   │
//! └──────────────────────────────┘
//! ```

#[cfg(feature = "calendly")]
pub mod calendly;
pub mod error;
pub mod model;
pub mod provider;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use model::{Account, EventType, ScheduledEvent, Slot};
pub use provider::{BoxFuture, SchedulingProvider};
