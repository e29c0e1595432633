//! Configuration module.
//!
//! The engine is configured via a TOML file, with support for environment
//! variable interpolation using `${VAR_NAME}` syntax.
//!
//! # Example
//!
//! ```toml
//! [observability.logging]
//! level = "debug"
//! format = "json"
//!
//! [[service_providers]]
//! entity_id = "https://sp.example.com"
//! zone_id = "uaa"
//!
//! [service_providers.config.static_attributes]
//! tenant = "${TENANT_NAME}"
//! ```

mod observability;
mod service_providers;

use std::{collections::HashSet, path::Path, sync::LazyLock};

pub use observability::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
pub use service_providers::*;
use validator::Validate;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Observability configuration (logging).
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Federation recipients that assertions may be issued to.
    #[serde(default)]
    pub service_providers: Vec<ServiceProviderConfig>,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// Environment variables in the format `${VAR_NAME}` are expanded.
    /// Missing required variables will cause an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e, path.as_ref().to_path_buf()))?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(contents)?;

        let config: EngineConfig = toml::from_str(&expanded).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for sp in &self.service_providers {
            sp.validate().map_err(|e| {
                ConfigError::Validation(format!("service provider '{}': {}", sp.entity_id, e))
            })?;

            if !seen.insert((sp.entity_id.as_str(), sp.zone_id.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "service provider '{}' is configured more than once in zone '{}'",
                    sp.entity_id, sp.zone_id
                )));
            }

            if sp.config.field_mappings.is_empty() && sp.config.static_attributes.is_empty() {
                tracing::debug!(
                    entity_id = %sp.entity_id,
                    "Service provider has no static attributes or attribute mappings"
                );
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {1}: {0}")]
    Io(std::io::Error, std::path::PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Expand `${VAR_NAME}` references, leaving anything after a `#` untouched.
fn expand_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(input.len());

    for line in input.lines() {
        let comment_pos = line.find('#');
        let mut last_end = 0;

        for cap in ENV_VAR_REGEX.captures_iter(line) {
            let Some(whole) = cap.get(0) else {
                continue;
            };

            if let Some(pos) = comment_pos
                && whole.start() >= pos
            {
                break;
            }

            result.push_str(&line[last_end..whole.start()]);

            let var_name = &cap[1];
            let value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;
            result.push_str(&value);

            last_end = whole.end();
        }

        result.push_str(&line[last_end..]);
        result.push('\n');
    }

    // Remove trailing newline if input didn't have one
    if !input.ends_with('\n') && result.ends_with('\n') {
        result.pop();
    }

    Ok(result)
}
