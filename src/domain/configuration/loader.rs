//! Configuration and secrets parsing.

use std::collections::BTreeMap;

use crate::domain::{AppConfig, AppError};

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a secrets file into a flat key/value table.
pub fn parse_secrets_content(content: &str) -> Result<BTreeMap<String, toml::Value>, AppError> {
    Ok(toml::from_str(content)?)
}
