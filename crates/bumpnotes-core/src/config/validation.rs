//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_manifest(config)?;
    validate_changelog(config)?;
    validate_tickets(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_manifest(config: &Config) -> Result<()> {
    if config.manifest.file.is_empty() {
        return Err(invalid("manifest.file", "file cannot be empty").into());
    }

    if config.manifest.field.is_empty() {
        return Err(invalid("manifest.field", "field cannot be empty").into());
    }

    if !config.manifest.tag_format.contains("{version}") {
        return Err(invalid("manifest.tag_format", "must contain {version} placeholder").into());
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.is_empty() {
        return Err(invalid("changelog.file", "file cannot be empty").into());
    }

    Ok(())
}

fn validate_tickets(config: &Config) -> Result<()> {
    if let Err(e) = url::Url::parse(&config.tickets.base_url) {
        return Err(invalid("tickets.base_url", format!("not a valid URL: {}", e)).into());
    }

    if let Err(e) = Regex::new(&config.tickets.pattern) {
        return Err(invalid("tickets.pattern", format!("not a valid pattern: {}", e)).into());
    }

    Ok(())
}
