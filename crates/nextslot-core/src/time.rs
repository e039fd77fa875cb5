//! Time types for availability lookups.
//!
//! This module provides [`AvailabilityWindow`], the `[start, end)` range
//! searched for open slots, and the second-precision formatting the
//! scheduling API expects for its window boundaries.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Number of days covered by an availability lookup.
///
/// The scheduling API rejects availability queries spanning more than a week.
pub const LOOKAHEAD_DAYS: u64 = 7;

/// A time window for querying open slots.
///
/// Represents a half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl AvailabilityWindow {
    /// Creates the lookahead window for `now`.
    ///
    /// The window starts at midnight of the calendar day following `now` in
    /// `now`'s own timezone and ends [`LOOKAHEAD_DAYS`] calendar days later,
    /// also at local midnight.
    pub fn starting_tomorrow<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let tomorrow = today.succ_opt().unwrap_or(today);
        let last = tomorrow
            .checked_add_days(Days::new(LOOKAHEAD_DAYS))
            .unwrap_or(tomorrow);

        Self {
            start: local_midnight(&tz, tomorrow),
            end: local_midnight(&tz, last),
        }
    }
}

/// Resolves midnight of `date` in `tz` to a UTC instant.
///
/// Where a DST transition skips midnight, the first valid hour of the day is
/// used instead. A date with no resolvable hour falls back to UTC midnight.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    (0..4)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| tz.from_local_datetime(&date.and_time(time)).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc())
}

/// Drops sub-second precision from an instant.
///
/// The fraction is discarded, never rounded.
pub fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Formats an instant the way the scheduling API requires:
/// `YYYY-MM-DDTHH:MM:SSZ`, UTC, no fractional seconds.
pub fn to_api_timestamp(dt: DateTime<Utc>) -> String {
    truncate_to_seconds(dt).to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn window_starts_at_next_midnight() {
        let now = utc(2024, 3, 15, 14, 37, 12);
        let window = AvailabilityWindow::starting_tomorrow(&now);

        assert_eq!(window.start, utc(2024, 3, 16, 0, 0, 0));
        assert_eq!(window.end, utc(2024, 3, 23, 0, 0, 0));
        assert_eq!(window.end - window.start, Duration::days(7));
    }

    #[test]
    fn window_just_before_midnight() {
        let now = utc(2024, 3, 15, 23, 59, 59) + Duration::milliseconds(999);
        let window = AvailabilityWindow::starting_tomorrow(&now);

        assert_eq!(window.start, utc(2024, 3, 16, 0, 0, 0));
    }

    #[test]
    fn window_at_exact_midnight_skips_today() {
        let now = utc(2024, 3, 15, 0, 0, 0);
        let window = AvailabilityWindow::starting_tomorrow(&now);

        assert_eq!(window.start, utc(2024, 3, 16, 0, 0, 0));
    }

    #[test]
    fn window_crosses_month_and_year() {
        let now = utc(2024, 12, 31, 9, 0, 0);
        let window = AvailabilityWindow::starting_tomorrow(&now);

        assert_eq!(window.start, utc(2025, 1, 1, 0, 0, 0));
        assert_eq!(window.end, utc(2025, 1, 8, 0, 0, 0));
    }

    #[test]
    fn window_uses_local_calendar_day() {
        // 22:30 UTC on the 15th is already the 16th in UTC+02:00.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = utc(2024, 3, 15, 22, 30, 0).with_timezone(&tz);
        let window = AvailabilityWindow::starting_tomorrow(&now);

        // Midnight of the 17th in UTC+02:00 is 22:00 UTC on the 16th.
        assert_eq!(window.start, utc(2024, 3, 16, 22, 0, 0));
        assert_eq!(window.end - window.start, Duration::days(7));
    }

    #[test]
    fn api_timestamp_drops_fraction() {
        let dt = utc(2024, 3, 16, 8, 30, 15) + Duration::milliseconds(987);
        assert_eq!(to_api_timestamp(dt), "2024-03-16T08:30:15Z");
        assert_eq!(truncate_to_seconds(dt), utc(2024, 3, 16, 8, 30, 15));
    }
}
