//! The `get_meeting_times` tool.
//!
//! A tool host registers [`descriptor`] and calls [`invoke`] on every request.
//! Each invocation builds its own provider from the injected configuration
//! and shares nothing with concurrent invocations.

use serde::Serialize;
use serde_json::{Value, json};

use nextslot_core::FormatOptions;
#[cfg(feature = "calendly")]
use nextslot_providers::ProviderResult;
#[cfg(feature = "calendly")]
use nextslot_providers::calendly::{CalendlyConfig, CalendlyProvider};

#[cfg(feature = "calendly")]
use crate::payload::ToolOutput;
#[cfg(feature = "calendly")]
use crate::resolver::AvailabilityResolver;

/// Registered tool name.
pub const TOOL_NAME: &str = "get_meeting_times";

/// Registered tool description.
pub const TOOL_DESCRIPTION: &str = "Get available time slots for Introduction Meeting bookings";

/// How a tool is advertised to its host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema of the arguments.
    pub input_schema: Value,
}

/// Describes `get_meeting_times`. It takes no arguments.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: TOOL_DESCRIPTION,
        input_schema: json!({ "type": "object", "properties": {} }),
    }
}

/// Options applied to every invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// How slot times are rendered.
    pub format: FormatOptions,
}

/// Runs the tool once against Calendly.
///
/// # Errors
///
/// Only a configuration error escapes, raised before any request. Every
/// workflow outcome, provider failures included, is returned as `Ok`.
#[cfg(feature = "calendly")]
pub async fn invoke(config: CalendlyConfig, options: &ToolOptions) -> ProviderResult<ToolOutput> {
    let provider = CalendlyProvider::new(config)?;
    let output = AvailabilityResolver::new(&provider)
        .with_format_options(options.format.clone())
        .run()
        .await;
    Ok(output)
}
