//! Calendly provider implementation.
//!
//! This module provides a [`CalendlyProvider`] backed by the Calendly v2 API.
//! Authentication is a bearer token (personal access token or OAuth access
//! token) supplied through [`CalendlyConfig`].
//!
//! # Example
//!
//! ```ignore
//! use nextslot_providers::calendly::{CalendlyConfig, CalendlyProvider};
//!
//! let provider = CalendlyProvider::new(CalendlyConfig::new(token))?;
//! let account = provider.current_account().await?;
//! ```

mod client;
mod config;
mod provider;

pub use client::{CalendlyClient, EVENT_TYPE_URI_PREFIX, canonical_event_type_uri};
pub use config::{API_KEY_ENV, CalendlyConfig, DEFAULT_BASE_URL};
pub use provider::CalendlyProvider;
