//! Secret references for credentials in `config.toml`.
//!
//! - `env::VAR_NAME` reads `$VAR_NAME`
//! - `pass::path/in/store` runs `pass show path/in/store` and keeps the first line
//! - anything else is the secret itself

use std::fmt;
use std::process::Command;

use crate::error::{ClientError, ClientResult};

/// Where a secret value comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretRef {
    /// Inline value.
    Plain(String),
    /// Environment variable name.
    Env(String),
    /// Path inside the `pass` store.
    Pass(String),
}

impl SecretRef {
    /// Parses a configured value.
    pub fn parse(value: &str) -> Self {
        if let Some(var) = value.strip_prefix("env::") {
            Self::Env(var.to_string())
        } else if let Some(path) = value.strip_prefix("pass::") {
            Self::Pass(path.to_string())
        } else {
            Self::Plain(value.to_string())
        }
    }

    /// Resolves the secret.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset, `pass` fails, or the resolved value
    /// is blank.
    pub fn resolve(&self) -> ClientResult<String> {
        let value = match self {
            Self::Plain(value) => value.clone(),
            Self::Env(var) => std::env::var(var).map_err(|_| {
                ClientError::config(format!("environment variable `{}` is not set", var))
            })?,
            Self::Pass(path) => resolve_pass(path)?,
        };

        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(ClientError::config(format!("{} resolved to an empty value", self)));
        }
        Ok(value)
    }
}

/// Never prints inline secrets.
impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => write!(f, "inline secret"),
            Self::Env(var) => write!(f, "env::{}", var),
            Self::Pass(path) => write!(f, "pass::{}", path),
        }
    }
}

impl fmt::Debug for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretRef({})", self)
    }
}

fn resolve_pass(path: &str) -> ClientResult<String> {
    let output = Command::new("pass")
        .arg("show")
        .arg(path)
        .output()
        .map_err(|e| ClientError::config(format!("failed to run `pass show {}`: {}", path, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClientError::config(format!(
            "`pass show {}` failed ({}): {}",
            path,
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or_default().to_string())
}
