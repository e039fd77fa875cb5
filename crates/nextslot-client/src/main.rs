//! nextslot CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use nextslot_client::cli::{Cli, Command, ConfigAction};
use nextslot_client::commands;
use nextslot_client::config::ClientConfig;
use nextslot_client::error::ClientResult;
use nextslot_core::{TracingConfig, init_tracing};
use nextslot_providers::calendly::CalendlyProvider;
use nextslot_tool::ToolOptions;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::for_cli(cli.debug).with_format(cli.log_format)) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config_path = commands::config::resolve_path(cli.config.as_deref());
    let config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    let api_key = cli.api_key.as_deref();
    let time_format = cli.time_format.as_deref();

    match cli.command.unwrap_or(Command::Times) {
        Command::Times => {
            let options = ToolOptions {
                format: config.format_options(time_format)?,
            };
            let provider_config = config.to_provider_config(api_key)?;
            commands::times::run(provider_config, &options, cli.json).await
        }
        Command::EventTypes => {
            let provider = CalendlyProvider::new(config.to_provider_config(api_key)?)?;
            commands::event_types::run(&provider, cli.json).await
        }
        Command::Scheduled { days } => {
            let options = config.format_options(time_format)?;
            let provider = CalendlyProvider::new(config.to_provider_config(api_key)?)?;
            commands::scheduled::run(&provider, days, options, cli.json).await
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config, api_key, time_format),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
        },
    }
}
