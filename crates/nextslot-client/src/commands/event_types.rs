//! List the account's event types.

use nextslot_core::bulletize;
use nextslot_providers::{EventType, SchedulingProvider};
use tracing::debug;

use crate::error::ClientResult;

/// Fetches and prints every event type of the current account.
pub async fn run(provider: &dyn SchedulingProvider, json: bool) -> ClientResult<()> {
    println!("{}", list(provider, json).await?);
    Ok(())
}

/// Fetches the event types and renders them.
pub async fn list(provider: &dyn SchedulingProvider, json: bool) -> ClientResult<String> {
    let account = provider.current_account().await?;
    let event_types = provider.list_event_types(Some(&account.uri)).await?;
    debug!(count = event_types.len(), "listed event types");

    if json {
        return Ok(serde_json::to_string_pretty(&event_types)?);
    }
    if event_types.is_empty() {
        return Ok("No event types found.".to_string());
    }
    let lines: Vec<String> = event_types.iter().map(describe).collect();
    Ok(bulletize(&lines))
}

fn describe(event_type: &EventType) -> String {
    let mut line = format!("{} ({})", event_type.name, event_type.status_label());
    if let Some(minutes) = event_type.duration {
        line.push_str(&format!(", {} min", minutes));
    }
    if let Some(url) = &event_type.scheduling_url {
        line.push_str(&format!(" - {}", url));
    }
    line
}
