//! Output formatting for slot listings.
//!
//! Slot start times are rendered in the caller's timezone with a
//! configurable strftime pattern, then joined into bullet lists.

use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

/// Default pattern for rendering a slot start, e.g. `Sat, Mar 16, 2024, 9:30 AM`.
pub const DEFAULT_TIME_FORMAT: &str = "%a, %b %-d, %Y, %-I:%M %p";

/// Bullet prefixed to every listed line.
pub const BULLET: &str = "•";

/// Errors raised while building [`FormatOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The pattern holds a specifier chrono cannot render.
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Formatting options for rendered date-times.
///
/// Times are rendered with a chrono strftime pattern in the clock's
/// timezone. Month and weekday names are always English; the host locale is
/// not consulted. Set a numeric pattern such as `%Y-%m-%d %H:%M` for
/// language-neutral output.
///
/// The pattern is checked when set, so rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    time_format: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl FormatOptions {
    /// Builder method to set the time format.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidTimeFormat`] when the pattern contains
    /// an unknown specifier.
    pub fn with_time_format(mut self, format: impl Into<String>) -> Result<Self, FormatError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidTimeFormat(format));
        }
        self.time_format = format;
        Ok(self)
    }

    /// The strftime pattern in use.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

/// Renders UTC instants in a fixed timezone.
#[derive(Debug, Clone)]
pub struct SlotFormatter<Tz: TimeZone> {
    tz: Tz,
    options: FormatOptions,
}

impl<Tz> SlotFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Creates a formatter rendering in `tz`.
    pub fn new(tz: Tz, options: FormatOptions) -> Self {
        Self { tz, options }
    }

    /// Formats a single instant as a local date-time string.
    pub fn format_time(&self, dt: &DateTime<Utc>) -> String {
        dt.with_timezone(&self.tz)
            .format(&self.options.time_format)
            .to_string()
    }

    /// Formats each instant and joins them into a bullet list.
    pub fn bulletize_times<'a, I>(&self, times: I) -> String
    where
        I: IntoIterator<Item = &'a DateTime<Utc>>,
    {
        let lines: Vec<String> = times.into_iter().map(|dt| self.format_time(dt)).collect();
        bulletize(&lines)
    }
}

/// Formats a list of items as bullet points, one per line.
pub fn bulletize(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    items
        .iter()
        .map(|item| format!("{} {}", BULLET, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn bulletize_empty() {
        assert_eq!(bulletize(&[]), "");
    }

    #[test]
    fn bulletize_lines() {
        let items = vec!["one".to_string(), "two".to_string()];
        insta::assert_snapshot!(bulletize(&items), @r"
        • one
        • two
        ");
    }

    #[test]
    fn format_time_default_pattern() {
        let formatter = SlotFormatter::new(Utc, FormatOptions::default());
        assert_eq!(
            formatter.format_time(&utc(2024, 3, 16, 9, 30)),
            "Sat, Mar 16, 2024, 9:30 AM"
        );
        assert_eq!(
            formatter.format_time(&utc(2024, 3, 16, 17, 5)),
            "Sat, Mar 16, 2024, 5:05 PM"
        );
    }

    #[test]
    fn format_time_in_offset() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let formatter =
            SlotFormatter::new(tz, FormatOptions::default().with_time_format("%Y-%m-%d %H:%M").unwrap());
        assert_eq!(
            formatter.format_time(&utc(2024, 3, 16, 3, 0)),
            "2024-03-15 22:00"
        );
    }

    #[test]
    fn bulletize_times_keeps_order() {
        let formatter =
            SlotFormatter::new(Utc, FormatOptions::default().with_time_format("%H:%M").unwrap());
        let times = [utc(2024, 3, 16, 15, 0), utc(2024, 3, 16, 9, 0)];
        assert_eq!(formatter.bulletize_times(&times), "• 15:00\n• 09:00");
    }

    #[test]
    fn rejects_unknown_specifier() {
        let err = FormatOptions::default().with_time_format("%H:%Q").unwrap_err();
        assert_eq!(err, FormatError::InvalidTimeFormat("%H:%Q".to_string()));
        assert_eq!(err.to_string(), "invalid time format: %H:%Q");
    }

    #[test]
    fn rejected_pattern_is_not_applied() {
        let options = FormatOptions::default();
        assert!(options.clone().with_time_format("%Y-%Q").is_err());
        assert_eq!(options.time_format(), DEFAULT_TIME_FORMAT);
    }
}
