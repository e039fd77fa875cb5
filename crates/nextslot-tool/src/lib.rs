//! Availability resolver and the `get_meeting_times` tool.
//!
//! - [`AvailabilityResolver`] - The lookup workflow over any [`SchedulingProvider`]
//! - [`ToolOutput`] - The single-text-block payload handed back to the host
//! - [`tool::invoke`] - One Calendly-backed invocation
//!
//! [`SchedulingProvider`]: nextslot_providers::SchedulingProvider

pub mod payload;
pub mod resolver;
pub mod tool;

pub use payload::{ContentBlock, ToolOutput};
pub use resolver::{
    AvailabilityResolver, EVENT_TYPE_KEYWORD, MAX_LISTED_SLOTS, Resolution, select_event_type,
};
pub use tool::{TOOL_DESCRIPTION, TOOL_NAME, ToolDescriptor, ToolOptions, descriptor};
