//! List meetings already booked on the account.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use nextslot_core::{FormatOptions, SlotFormatter, bulletize};
use nextslot_providers::{ScheduledEvent, SchedulingProvider};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Fetches and prints the events starting within `days` from now.
pub async fn run(
    provider: &dyn SchedulingProvider,
    days: u32,
    options: FormatOptions,
    json: bool,
) -> ClientResult<()> {
    let now = chrono::Local::now();
    println!("{}", list(provider, &now, days, options, json).await?);
    Ok(())
}

/// Fetches the events starting in `[now, now + days)` and renders them in
/// `now`'s timezone.
pub async fn list<Tz>(
    provider: &dyn SchedulingProvider,
    now: &DateTime<Tz>,
    days: u32,
    options: FormatOptions,
    json: bool,
) -> ClientResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let start = now.with_timezone(&Utc);
    let end = TimeDelta::try_days(i64::from(days))
        .and_then(|span| start.checked_add_signed(span))
        .ok_or_else(|| ClientError::config(format!("--days out of range: {}", days)))?;

    let account = provider.current_account().await?;
    let mut events = provider
        .list_scheduled_events(&account.uri, Some(start), Some(end))
        .await?;
    events.sort_by_key(|event| event.start_time);
    debug!(count = events.len(), days, "listed scheduled events");

    if json {
        return Ok(serde_json::to_string_pretty(&events)?);
    }
    if events.is_empty() {
        return Ok(format!("No scheduled meetings in the next {} days.", days));
    }

    let formatter = SlotFormatter::new(now.timezone(), options);
    let lines: Vec<String> = events
        .iter()
        .map(|event| describe(&formatter, event))
        .collect();
    Ok(bulletize(&lines))
}

fn describe<Tz>(formatter: &SlotFormatter<Tz>, event: &ScheduledEvent) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let name = event.name.as_deref().unwrap_or("(untitled)");
    let mut line = format!("{} {}", formatter.format_time(&event.start_time), name);
    if let Some(status) = event.status.as_deref().filter(|s| *s != "active") {
        line.push_str(&format!(" ({})", status));
    }
    line
}
