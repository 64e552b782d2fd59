//! API credential resolution.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// Name of the credential in both the secrets file and the environment.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Secret API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolve the API key: the secrets file first, then the environment.
///
/// `secrets` is the parsed secrets file, if one exists. `env` looks up an
/// environment variable by name. `secrets_label` names the secrets file in the
/// error message.
pub fn resolve_api_key(
    secrets: Option<&BTreeMap<String, toml::Value>>,
    env: impl Fn(&str) -> Option<String>,
    secrets_label: &str,
) -> Result<ApiKey, AppError> {
    let from_secrets = secrets
        .and_then(|table| table.get(GEMINI_API_KEY))
        .and_then(toml::Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    from_secrets
        .or_else(|| env(GEMINI_API_KEY).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
        .map(ApiKey)
        .ok_or_else(|| AppError::CredentialMissing {
            var: GEMINI_API_KEY.to_string(),
            secrets: secrets_label.to_string(),
        })
}
