pub mod app_config;
pub mod credentials;
pub mod loader;

pub use app_config::{AdvisorConfig, AppConfig, DataConfig, GeminiApiConfig, SessionConfig};
pub use credentials::{ApiKey, GEMINI_API_KEY, resolve_api_key};
pub use loader::{parse_config_content, parse_secrets_content};
