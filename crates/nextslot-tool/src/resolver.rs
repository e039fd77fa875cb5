//! Availability resolution workflow.
//!
//! The resolver runs four strictly sequential steps, each depending on the
//! previous one's output:
//!
//! 1. look up the authenticated account
//! 2. pick the first active event type whose name contains "introduction"
//! 3. compute the lookahead window starting tomorrow
//! 4. fetch open slots in that window
//!
//! [`AvailabilityResolver::resolve`] returns every provider failure as an
//! explicit `Err`; [`AvailabilityResolver::render`] turns any outcome,
//! failures included, into a single text payload.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use tracing::info;

use nextslot_core::{AvailabilityWindow, FormatOptions, SlotFormatter, LOOKAHEAD_DAYS, bulletize};
use nextslot_providers::{EventType, ProviderError, ProviderResult, SchedulingProvider, Slot};

use crate::payload::ToolOutput;

/// Case-insensitive keyword an event type name must contain.
pub const EVENT_TYPE_KEYWORD: &str = "introduction";

/// Display name of the event type being looked for.
pub const EVENT_TYPE_DISPLAY_NAME: &str = "Introduction Meeting";

/// Maximum number of slots listed in the payload.
pub const MAX_LISTED_SLOTS: usize = 15;

/// Terminal outcome of a successful workflow run.
///
/// `checked_at` is the single clock reading taken when the window was
/// computed; its timezone is the one slot times are rendered in.
#[derive(Debug, Clone)]
pub enum Resolution<Tz: TimeZone> {
    /// No active event type matched; carries everything that was returned.
    NoMatchingEventType { event_types: Vec<EventType> },
    /// The event type has no open slot in the window.
    NoSlots {
        event_type: EventType,
        window: AvailabilityWindow,
        checked_at: DateTime<Tz>,
    },
    /// Open slots were found.
    Slots {
        event_type: EventType,
        window: AvailabilityWindow,
        checked_at: DateTime<Tz>,
        /// At most [`MAX_LISTED_SLOTS`] slots, in provider order.
        slots: Vec<Slot>,
        /// How many slots the provider returned.
        total: usize,
    },
}

/// Picks the first active event type whose name contains [`EVENT_TYPE_KEYWORD`].
///
/// Provider order is the only tie-break.
pub fn select_event_type(event_types: &[EventType]) -> Option<&EventType> {
    event_types
        .iter()
        .find(|et| et.active && et.name_contains(EVENT_TYPE_KEYWORD))
}

type Clock<'a, Tz> = Box<dyn Fn() -> DateTime<Tz> + Send + Sync + 'a>;

/// Orchestrates the lookup against a [`SchedulingProvider`].
///
/// The clock's timezone is the local time used both for the window and for
/// rendering slot times.
pub struct AvailabilityResolver<'a, Tz: TimeZone> {
    provider: &'a dyn SchedulingProvider,
    clock: Clock<'a, Tz>,
    options: FormatOptions,
}

impl<'a> AvailabilityResolver<'a, Local> {
    /// Creates a resolver using the process's local time.
    pub fn new(provider: &'a dyn SchedulingProvider) -> Self {
        Self::with_clock(provider, Local::now)
    }
}

impl<'a, Tz> AvailabilityResolver<'a, Tz>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display + Send + Sync,
{
    /// Creates a resolver reading "now" from `clock`.
    pub fn with_clock<F>(provider: &'a dyn SchedulingProvider, clock: F) -> Self
    where
        F: Fn() -> DateTime<Tz> + Send + Sync + 'a,
    {
        Self {
            provider,
            clock: Box::new(clock),
            options: FormatOptions::default(),
        }
    }

    /// Builder method to set how slot times are rendered.
    #[must_use]
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the workflow and renders its outcome.
    pub async fn run(&self) -> ToolOutput {
        let result = self.resolve().await;
        self.render(result)
    }

    /// Runs the four workflow steps.
    ///
    /// # Errors
    ///
    /// Returns the first provider error, unchanged.
    pub async fn resolve(&self) -> ProviderResult<Resolution<Tz>> {
        let account = self.provider.current_account().await?;

        let event_types = self
            .provider
            .list_event_types(Some(account.uri.as_str()))
            .await?;

        let Some(event_type) = select_event_type(&event_types).cloned() else {
            info!(count = event_types.len(), "no active introduction event type");
            return Ok(Resolution::NoMatchingEventType { event_types });
        };

        // Anchored to this step, not to the start of the run.
        let checked_at = (self.clock)();
        let window = AvailabilityWindow::starting_tomorrow(&checked_at);

        let mut slots = self
            .provider
            .list_available_times(&event_type.uri, window.start, window.end)
            .await?;

        let total = slots.len();
        info!(event_type = %event_type.name, total, "resolved available times");

        if slots.is_empty() {
            return Ok(Resolution::NoSlots {
                event_type,
                window,
                checked_at,
            });
        }

        slots.truncate(MAX_LISTED_SLOTS);
        Ok(Resolution::Slots {
            event_type,
            window,
            checked_at,
            slots,
            total,
        })
    }

    /// Converts any workflow outcome into the display payload.
    pub fn render(&self, result: ProviderResult<Resolution<Tz>>) -> ToolOutput {
        let text = match result {
            Ok(resolution) => self.render_resolution(&resolution),
            Err(err) => render_error(&err),
        };
        ToolOutput::text(text)
    }

    fn render_resolution(&self, resolution: &Resolution<Tz>) -> String {
        match resolution {
            Resolution::NoMatchingEventType { event_types } => {
                let lines: Vec<String> = event_types
                    .iter()
                    .map(|et| format!("{} ({})", et.name, et.status_label()))
                    .collect();
                format!(
                    "📅 No active \"{}\" event type found. Available event types:\n{}",
                    EVENT_TYPE_DISPLAY_NAME,
                    bulletize(&lines)
                )
            }
            Resolution::NoSlots { event_type, .. } => format!(
                "📅 No available times found for \"{}\" in the next {} days.",
                event_type.name, LOOKAHEAD_DAYS
            ),
            Resolution::Slots {
                event_type,
                checked_at,
                slots,
                total,
                ..
            } => {
                let formatter = SlotFormatter::new(checked_at.timezone(), self.options.clone());
                let list = formatter.bulletize_times(slots.iter().map(|slot| &slot.start_time));
                format!(
                    "📅 **Available Times for \"{}\"** (Next {} of {} slots):\n\n{}",
                    event_type.name,
                    slots.len(),
                    total,
                    list
                )
            }
        }
    }
}

fn render_error(err: &ProviderError) -> String {
    format!("❌ Error fetching available times: {}", err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{Duration, TimeZone, Utc};
    use nextslot_providers::testing::ErrorProvider;
    use nextslot_providers::{Account, BoxFuture, ScheduledEvent};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Account,
        EventTypes,
        AvailableTimes,
    }

    /// In-memory provider recording what it was asked for.
    struct FakeProvider {
        account_uri: String,
        event_types: Vec<EventType>,
        slots: Vec<Slot>,
        fail_at: Option<Step>,
        calls: Mutex<Vec<String>>,
        windows: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>,
    }

    impl FakeProvider {
        fn new(event_types: Vec<EventType>, slots: Vec<Slot>) -> Self {
            Self {
                account_uri: "u1".to_string(),
                event_types,
                slots,
                fail_at: None,
                calls: Mutex::new(Vec::new()),
                windows: Mutex::new(Vec::new()),
            }
        }

        fn failing_at(mut self, step: Step) -> Self {
            self.fail_at = Some(step);
            self
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn check(&self, step: Step) -> ProviderResult<()> {
            if self.fail_at == Some(step) {
                Err(ProviderError::request_failed(500, "Internal Server Error"))
            } else {
                Ok(())
            }
        }
    }

    impl SchedulingProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn current_account(&self) -> BoxFuture<'_, ProviderResult<Account>> {
            self.record("current_account".to_string());
            let result = self
                .check(Step::Account)
                .map(|()| Account::new(&self.account_uri));
            Box::pin(async move { result })
        }

        fn list_event_types<'a>(
            &'a self,
            account_uri: Option<&'a str>,
        ) -> BoxFuture<'a, ProviderResult<Vec<EventType>>> {
            self.record(format!("list_event_types({})", account_uri.unwrap_or("-")));
            let result = self
                .check(Step::EventTypes)
                .map(|()| self.event_types.clone());
            Box::pin(async move { result })
        }

        fn list_scheduled_events<'a>(
            &'a self,
            _account_uri: &'a str,
            _min_start: Option<DateTime<Utc>>,
            _max_start: Option<DateTime<Utc>>,
        ) -> BoxFuture<'a, ProviderResult<Vec<ScheduledEvent>>> {
            Box::pin(async move { Ok(Vec::new()) })
        }

        fn list_available_times<'a>(
            &'a self,
            event_type_uri: &'a str,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> BoxFuture<'a, ProviderResult<Vec<Slot>>> {
            self.record(format!("list_available_times({})", event_type_uri));
            self.windows.lock().unwrap().push((start, end));
            let result = self
                .check(Step::AvailableTimes)
                .map(|()| self.slots.clone());
            Box::pin(async move { result })
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 37, 12).unwrap()
    }

    fn resolver(provider: &FakeProvider) -> AvailabilityResolver<'_, Utc> {
        AvailabilityResolver::with_clock(provider, now)
            .with_format_options(
                FormatOptions::default()
                    .with_time_format("%Y-%m-%d %H:%M")
                    .unwrap(),
            )
    }

    /// Slots every 30 minutes from 09:00 UTC on 2024-03-16.
    fn slots(n: usize) -> Vec<Slot> {
        let first = Utc.with_ymd_and_hms(2024, 3, 16, 9, 0, 0).unwrap();
        (0..n)
            .map(|i| Slot::new(first + Duration::minutes(30 * i as i64)))
            .collect()
    }

    fn intro_types() -> Vec<EventType> {
        vec![
            EventType::new("t1", "Team Sync", true),
            EventType::new("e1", "Introduction Meeting", true),
        ]
    }

    fn bullet_lines(text: &str) -> Vec<&str> {
        text.lines().filter(|l| l.starts_with("• ")).collect()
    }

    #[test]
    fn selects_first_active_match() {
        let types = vec![
            EventType::new("a", "Introduction Meeting", false),
            EventType::new("b", "Team Sync", true),
            EventType::new("c", "Quick introduction", true),
            EventType::new("d", "Introduction Meeting", true),
        ];
        assert_eq!(select_event_type(&types).unwrap().uri, "c");
    }

    #[test]
    fn selects_nothing_without_active_match() {
        let types = vec![
            EventType::new("a", "INTRODUCTION", false),
            EventType::new("b", "Team Sync", true),
        ];
        assert!(select_event_type(&types).is_none());
        assert!(select_event_type(&[]).is_none());
    }

    #[tokio::test]
    async fn end_to_end_three_slots() {
        let provider = FakeProvider::new(intro_types(), slots(3));
        let output = resolver(&provider).run().await;
        let text = output.as_text();

        assert!(text.starts_with("📅 **Available Times for \"Introduction Meeting\"** (Next 3 of 3 slots):\n\n"));
        assert_eq!(
            bullet_lines(text),
            vec![
                "• 2024-03-16 09:00",
                "• 2024-03-16 09:30",
                "• 2024-03-16 10:00",
            ]
        );
        assert_eq!(
            provider.calls(),
            vec![
                "current_account",
                "list_event_types(u1)",
                "list_available_times(e1)",
            ]
        );
    }

    #[tokio::test]
    async fn queries_window_starting_tomorrow() {
        let provider = FakeProvider::new(intro_types(), slots(1));
        resolver(&provider).resolve().await.unwrap();

        let windows = provider.windows.lock().unwrap().clone();
        assert_eq!(
            windows,
            vec![(
                Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 3, 23, 0, 0, 0).unwrap(),
            )]
        );
    }

    #[tokio::test]
    async fn truncates_to_fifteen_slots_in_order() {
        let provider = FakeProvider::new(intro_types(), slots(22));
        let resolution = resolver(&provider).resolve().await.unwrap();

        let Resolution::Slots { slots: listed, total, .. } = &resolution else {
            panic!("expected slots, got {:?}", resolution);
        };
        assert_eq!(*total, 22);
        assert_eq!(listed.as_slice(), &slots(22)[..15]);

        let text = resolver(&provider).render(Ok(resolution)).into_text();
        assert!(text.contains("(Next 15 of 22 slots)"));
        let lines = bullet_lines(&text);
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "• 2024-03-16 09:00");
        assert_eq!(lines[14], "• 2024-03-16 16:00");
    }

    #[tokio::test]
    async fn exactly_fifteen_slots() {
        let provider = FakeProvider::new(intro_types(), slots(15));
        let text = resolver(&provider).run().await.into_text();

        assert!(text.contains("(Next 15 of 15 slots)"));
        assert_eq!(bullet_lines(&text).len(), 15);
    }

    #[tokio::test]
    async fn keeps_provider_order() {
        let mut unordered = slots(3);
        unordered.reverse();
        let provider = FakeProvider::new(intro_types(), unordered);
        let text = resolver(&provider).run().await.into_text();

        assert_eq!(
            bullet_lines(&text),
            vec![
                "• 2024-03-16 10:00",
                "• 2024-03-16 09:30",
                "• 2024-03-16 09:00",
            ]
        );
    }

    #[tokio::test]
    async fn no_slots_names_event_type() {
        let provider = FakeProvider::new(intro_types(), Vec::new());
        let text = resolver(&provider).run().await.into_text();

        insta::assert_snapshot!(
            text,
            @r#"📅 No available times found for "Introduction Meeting" in the next 7 days."#
        );
        assert!(bullet_lines(&text).is_empty());
    }

    #[tokio::test]
    async fn no_match_lists_event_types() {
        let types = vec![
            EventType::new("t1", "Team Sync", true),
            EventType::new("e1", "Introduction Meeting", false),
        ];
        let provider = FakeProvider::new(types, slots(3));
        let text = resolver(&provider).run().await.into_text();

        assert_eq!(
            text,
            "📅 No active \"Introduction Meeting\" event type found. Available event types:\n\
             • Team Sync (Active)\n\
             • Introduction Meeting (Inactive)"
        );
        // Slot listing is never reached.
        assert_eq!(provider.calls().len(), 2);
    }

    #[tokio::test]
    async fn failure_at_any_step_renders_error() {
        for step in [Step::Account, Step::EventTypes, Step::AvailableTimes] {
            let provider = FakeProvider::new(intro_types(), slots(3)).failing_at(step);
            let text = resolver(&provider).run().await.into_text();

            assert_eq!(
                text,
                "❌ Error fetching available times: Calendly API error: 500 Internal Server Error",
                "{:?}",
                step
            );
            assert!(bullet_lines(&text).is_empty());
        }
    }

    #[tokio::test]
    async fn failure_stops_the_workflow() {
        let provider = FakeProvider::new(intro_types(), slots(3)).failing_at(Step::Account);
        let result = resolver(&provider).resolve().await;

        assert_eq!(result.unwrap_err().status(), Some(500));
        assert_eq!(provider.calls(), vec!["current_account"]);
    }

    #[tokio::test]
    async fn unreachable_provider_renders_error() {
        let provider = ErrorProvider::new("calendly", ProviderError::network("request timeout"));
        let output = AvailabilityResolver::with_clock(&provider, now).run().await;

        assert_eq!(
            output.as_text(),
            "❌ Error fetching available times: request timeout"
        );
    }

    #[tokio::test]
    async fn run_reads_clock_once() {
        let provider = FakeProvider::new(intro_types(), slots(2));
        let reads = Mutex::new(0);
        let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let clock = || {
            *reads.lock().unwrap() += 1;
            now().with_timezone(&tz)
        };
        let text = AvailabilityResolver::with_clock(&provider, clock)
            .with_format_options(FormatOptions::default().with_time_format("%H:%M").unwrap())
            .run()
            .await
            .into_text();

        assert_eq!(*reads.lock().unwrap(), 1);
        // Rendered in the clock's UTC+02:00 offset.
        assert_eq!(bullet_lines(&text), vec!["• 11:00", "• 11:30"]);
    }

    #[tokio::test]
    async fn slots_carry_checked_at() {
        let provider = FakeProvider::new(intro_types(), slots(1));
        let resolution = resolver(&provider).resolve().await.unwrap();

        let Resolution::Slots { checked_at, .. } = &resolution else {
            panic!("expected slots, got {:?}", resolution);
        };
        assert_eq!(*checked_at, now());
    }

    #[tokio::test]
    async fn clock_is_read_after_event_type_lookup() {
        let provider = FakeProvider::new(intro_types(), slots(1));
        let clock = || {
            provider.record("clock".to_string());
            now()
        };
        AvailabilityResolver::with_clock(&provider, clock)
            .resolve()
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![
                "current_account",
                "list_event_types(u1)",
                "clock",
                "list_available_times(e1)",
            ]
        );
    }
}
