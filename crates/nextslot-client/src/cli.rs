//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nextslot_core::TracingOutputFormat;

/// nextslot - Your next Introduction Meeting slots at a glance
#[derive(Debug, Parser)]
#[command(name = "nextslot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "NEXTSLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log output format on stderr (compact, pretty, json)
    #[arg(long, default_value = "compact")]
    pub log_format: TracingOutputFormat,

    /// Calendly personal access token
    #[arg(long, env = "CALENDLY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print the tool payload as JSON
    #[arg(long)]
    pub json: bool,

    /// strftime pattern for slot times
    #[arg(long)]
    pub time_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Upper bound accepted by `scheduled --days`.
pub const MAX_SCHEDULED_DAYS: i64 = 3650;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next available Introduction Meeting slots (default)
    Times,

    /// List the account's event types
    EventTypes,

    /// List meetings already booked
    Scheduled {
        /// Number of days to look ahead from now
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..=MAX_SCHEDULED_DAYS))]
        days: u32,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
