//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/nextslot/config.toml` by default:
//!
//! ```toml
//! [calendly]
//! api_key = "env::CALENDLY_TOKEN"
//! base_url = "https://api.calendly.com"
//! timeout_secs = 30
//!
//! [display]
//! time_format = "%a, %b %-d, %Y, %-I:%M %p"
//! ```
//!
//! `api_key` accepts secret references, see [`crate::secret`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use nextslot_core::{DEFAULT_TIME_FORMAT, FormatOptions};
use nextslot_providers::calendly::{API_KEY_ENV, CalendlyConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::secret::SecretRef;

/// Configuration for the nextslot client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Calendly connection settings.
    pub calendly: CalendlySettings,

    /// Display settings.
    pub display: DisplaySettings,
}

/// Calendly connection settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendlySettings {
    /// Token or secret reference (`env::VAR`, `pass::path`).
    pub api_key: Option<String>,

    /// API endpoint override.
    pub base_url: Option<String>,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CalendlySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: 30,
        }
    }
}

impl std::fmt::Debug for CalendlySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendlySettings")
            .field(
                "api_key",
                &self.api_key.as_deref().map(|v| SecretRef::parse(v).to_string()),
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// chrono strftime pattern for slot times.
    pub time_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if it does not
    /// exist.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = toml::from_str(&content).map_err(|e| {
            ClientError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nextslot")
    }

    /// Returns the formatting options, with an optional pattern override.
    ///
    /// # Errors
    ///
    /// Fails when the pattern contains an unknown strftime specifier.
    pub fn format_options(&self, time_format: Option<&str>) -> ClientResult<FormatOptions> {
        let pattern = time_format.unwrap_or(&self.display.time_format);
        FormatOptions::default()
            .with_time_format(pattern)
            .map_err(|e| ClientError::config(e.to_string()))
    }

    /// Builds the provider configuration.
    ///
    /// `api_key_override` comes from `--api-key` or `CALENDLY_API_KEY` and
    /// wins over the file.
    ///
    /// # Errors
    ///
    /// Fails when no token is available, a secret reference cannot be
    /// resolved, or `base_url` is not a URL.
    pub fn to_provider_config(&self, api_key_override: Option<&str>) -> ClientResult<CalendlyConfig> {
        let api_key = match api_key_override.filter(|key| !key.trim().is_empty()) {
            Some(key) => key.trim().to_string(),
            None => match self.calendly.api_key.as_deref() {
                Some(value) => SecretRef::parse(value).resolve()?,
                None => {
                    return Err(ClientError::config(format!(
                        "{} environment variable is required (or set [calendly] api_key)",
                        API_KEY_ENV
                    )));
                }
            },
        };

        let mut config = CalendlyConfig::new(api_key)
            .with_timeout(Duration::from_secs(self.calendly.timeout_secs));
        if let Some(base_url) = &self.calendly.base_url {
            let url = Url::parse(base_url)
                .map_err(|e| ClientError::config(format!("invalid base_url {}: {}", base_url, e)))?;
            config = config.with_base_url(url);
        }
        config.validate()?;
        Ok(config)
    }
}
