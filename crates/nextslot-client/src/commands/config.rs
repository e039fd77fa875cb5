//! Configuration commands.

use std::path::{Path, PathBuf};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::secret::SecretRef;

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig, path: &Path) -> ClientResult<()> {
    println!("# config.toml ({})", path.display());
    println!("{}", render(config)?);
    Ok(())
}

/// Serializes the configuration with inline tokens masked.
///
/// `env::` and `pass::` references are printed as written.
pub fn render(config: &ClientConfig) -> ClientResult<String> {
    let mut shown = config.clone();
    if let Some(key) = shown.calendly.api_key.as_mut()
        && matches!(SecretRef::parse(key), SecretRef::Plain(_))
    {
        *key = "<redacted>".to_string();
    }
    toml::to_string_pretty(&shown)
        .map_err(|e| ClientError::config(format!("failed to serialize config: {}", e)))
}

/// Validate the configuration.
///
/// Resolves the token the same way a lookup would, so a broken secret
/// reference is reported here.
pub fn validate(
    config: &ClientConfig,
    api_key_override: Option<&str>,
    time_format: Option<&str>,
) -> ClientResult<()> {
    let provider = config.to_provider_config(api_key_override)?;
    config.format_options(time_format)?;
    println!("Calendly endpoint: {}", provider.base_url);
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path(explicit: Option<&Path>) -> ClientResult<()> {
    println!("config: {}", resolve_path(explicit).display());
    Ok(())
}

/// Returns the file a run would read.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(ClientConfig::default_path)
}
