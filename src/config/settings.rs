//! Runtime settings from environment variables.

use std::env::VarError;
use std::time::Duration;

use crate::error::{EnvtierError, Result};

/// Name of the parameter holding the environment label.
pub const PARAM_NAME_VAR: &str = "SSM_PARAM_NAME";
/// Optional read timeout in milliseconds.
pub const STORE_TIMEOUT_VAR: &str = "ENVTIER_STORE_TIMEOUT_MS";
/// Optional SSM endpoint override.
pub const SSM_ENDPOINT_VAR: &str = "ENVTIER_SSM_ENDPOINT";
/// Request decryption of `SecureString` parameters.
pub const SSM_DECRYPT_VAR: &str = "ENVTIER_SSM_DECRYPT";
/// Log output format, `json` or `text`.
pub const LOG_FORMAT_VAR: &str = "ENVTIER_LOG_FORMAT";
/// Set by the Lambda execution environment.
pub const LAMBDA_FUNCTION_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event (CloudWatch).
    Json,
    /// Human-readable lines.
    #[default]
    Text,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "pretty" => Ok(Self::Text),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Runtime settings.
///
/// # Example
///
/// ```
/// use envtier::config::{LogFormat, Settings};
///
/// let settings = Settings::from_env_fn(|key| match key {
///     "SSM_PARAM_NAME" => Ok("/platform/account/env".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// })
/// .unwrap();
///
/// assert_eq!(settings.require_parameter_name().unwrap(), "/platform/account/env");
/// assert_eq!(settings.log_format, LogFormat::Text);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Parameter holding the environment label.
    pub parameter_name: Option<String>,
    /// Bound on each store read.
    pub store_timeout: Option<Duration>,
    /// SSM endpoint override.
    pub ssm_endpoint: Option<String>,
    /// Request decryption of `SecureString` parameters.
    pub ssm_decrypt: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_fn(|key| std::env::var(key))
    }

    /// Load settings with a custom env var lookup (for testing).
    pub fn from_env_fn<F>(env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let verbatim = |key: &str| env_fn(key).ok().filter(|value| !value.trim().is_empty());
        let lookup = |key: &str| verbatim(key).map(|value| value.trim().to_string());

        let store_timeout = match lookup(STORE_TIMEOUT_VAR) {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|_| invalid(STORE_TIMEOUT_VAR, &raw))?;
                if millis == 0 {
                    return Err(invalid(STORE_TIMEOUT_VAR, &raw));
                }
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        let ssm_decrypt = match lookup(SSM_DECRYPT_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| invalid(SSM_DECRYPT_VAR, &raw))?,
            None => false,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|_| invalid(LOG_FORMAT_VAR, &raw))?,
            None if lookup(LAMBDA_FUNCTION_VAR).is_some() => LogFormat::Json,
            None => LogFormat::Text,
        };

        Ok(Self {
            parameter_name: verbatim(PARAM_NAME_VAR),
            store_timeout,
            ssm_endpoint: lookup(SSM_ENDPOINT_VAR),
            ssm_decrypt,
            log_format,
        })
    }

    /// Get the parameter name, failing if it was not configured.
    pub fn require_parameter_name(&self) -> Result<&str> {
        self.parameter_name
            .as_deref()
            .ok_or_else(|| EnvtierError::ConfigValidationError {
                message: format!("{} is not set", PARAM_NAME_VAR),
            })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(var: &str, raw: &str) -> EnvtierError {
    EnvtierError::ConfigValidationError {
        message: format!("{}='{}' is not a valid value", var, raw),
    }
}
