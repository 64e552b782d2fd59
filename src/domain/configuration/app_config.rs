//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `.lessonbot/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Generation service configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Recommendation data files.
    #[serde(default)]
    pub data: DataConfig,
    /// Session lifecycle.
    #[serde(default)]
    pub session: SessionConfig,
    /// Program Advisor resource offered when a blueprint is missing.
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the generative language API (without `/models/...`).
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.model.contains('/') {
            return Err(AppError::InvalidConfig(format!(
                "model '{}' must be a bare model name",
                self.model
            )));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&endpoint).map_err(|e| {
            AppError::InvalidConfig(format!("Invalid generation endpoint '{}': {}", endpoint, e))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Locations of the two recommendation tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    #[serde(default = "default_recommendations")]
    pub recommendations: PathBuf,
    #[serde(default = "default_problem_recommendations")]
    pub problem_recommendations: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            recommendations: default_recommendations(),
            problem_recommendations: default_problem_recommendations(),
        }
    }
}

fn default_recommendations() -> PathBuf {
    PathBuf::from("recommendations_final.csv")
}

fn default_problem_recommendations() -> PathBuf {
    PathBuf::from("problem_recommendations_final.csv")
}

/// Session lifecycle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Minutes of inactivity after which a session is discarded.
    #[serde(default = "default_idle_timeout_mins")]
    pub idle_timeout_mins: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { idle_timeout_mins: default_idle_timeout_mins() }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.idle_timeout_mins == 0 {
            return Err(AppError::InvalidConfig(
                "idle_timeout_mins must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn idle_timeout(&self) -> chrono::Duration {
        i64::try_from(self.idle_timeout_mins)
            .ok()
            .and_then(chrono::Duration::try_minutes)
            .unwrap_or(chrono::Duration::MAX)
    }
}

fn default_idle_timeout_mins() -> u64 {
    30
}

/// Program Advisor link configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub url: Option<Url>,
}
