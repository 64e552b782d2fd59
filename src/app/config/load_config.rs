//! Configuration, secrets, and credential loading from disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::{parse_config_content, parse_secrets_content, resolve_api_key};
use crate::domain::{ApiKey, AppConfig, AppError, CONFIG_FILE, LESSONBOT_DIR, SECRETS_FILE};

/// Default configuration path under `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(LESSONBOT_DIR).join(CONFIG_FILE)
}

/// Default secrets path under `root`.
pub fn default_secrets_path(root: &Path) -> PathBuf {
    root.join(LESSONBOT_DIR).join(SECRETS_FILE)
}

/// Load configuration.
///
/// An explicit path must exist. The default `.lessonbot/config.toml` is
/// optional; when absent every setting takes its default.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (root.join(path), true),
        None => (default_config_path(root), false),
    };

    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "loaded configuration");
            parse_config_content(&content)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "no configuration file; using defaults");
            Ok(AppConfig::default())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(AppError::config_error(format!(
            "Configuration file not found: {}",
            path.display()
        ))),
        Err(err) => Err(err.into()),
    }
}

/// Load the secrets file, if present.
pub fn load_secrets(path: &Path) -> Result<Option<BTreeMap<String, toml::Value>>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_secrets_content(&content).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Resolve the API key from the secrets file, then the process environment.
pub fn load_api_key(root: &Path, secrets: Option<&Path>) -> Result<ApiKey, AppError> {
    let path = match secrets {
        Some(path) => root.join(path),
        None => default_secrets_path(root),
    };
    let table = load_secrets(&path)?;
    let label = path.strip_prefix(root).unwrap_or(&path).display().to_string();

    resolve_api_key(table.as_ref(), |name| std::env::var(name).ok(), &label)
}
