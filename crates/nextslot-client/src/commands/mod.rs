//! Subcommand implementations.
//!
//! Each command renders into a `String` so it can be tested without a
//! terminal; `run` prints it.

pub mod config;
pub mod event_types;
pub mod scheduled;
pub mod times;
