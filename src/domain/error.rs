use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for lessonbot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No API credential in the secrets file or the environment.
    #[error(
        "API Key not found. Please set your {var} in {secrets} or as an environment variable."
    )]
    CredentialMissing { var: String, secrets: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A data file exists but could not be read as CSV.
    #[error("Failed to read data file {}: {details}", path.display())]
    DataFile { path: PathBuf, details: String },

    /// The generation service rejected the request or could not be reached.
    #[error("An error occurred while contacting the AI model: {message}")]
    Generation { message: String, status: Option<u16> },

    /// Prompt assembly failed.
    #[error(transparent)]
    PromptAssembly(#[from] PromptAssemblyError),

    /// Terminal interaction failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn generation<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Generation { message: message.into(), status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_missing_names_both_sources() {
        let err = AppError::CredentialMissing {
            var: "GEMINI_API_KEY".into(),
            secrets: ".lessonbot/secrets.toml".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
        assert!(msg.contains(".lessonbot/secrets.toml"));
    }

    #[test]
    fn generation_error_surfaces_underlying_message() {
        let err = AppError::generation("quota exceeded", Some(429));
        assert_eq!(err.to_string(), "An error occurred while contacting the AI model: quota exceeded");
    }
}
