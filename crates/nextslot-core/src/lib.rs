//! Core types: availability window, slot formatting, tracing

pub mod format;
pub mod time;
pub mod tracing;

pub use format::{
    bulletize, FormatError, FormatOptions, SlotFormatter, BULLET, DEFAULT_TIME_FORMAT,
};
pub use time::{to_api_timestamp, truncate_to_seconds, AvailabilityWindow, LOOKAHEAD_DAYS};
pub use tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
