pub mod configuration;
pub mod error;
pub mod form_data;
pub mod goal;
pub mod methodology;
pub mod prompt;
pub mod recommendation;
pub mod session;
pub mod wizard;

pub use configuration::{
    AdvisorConfig, ApiKey, AppConfig, DataConfig, GeminiApiConfig, SessionConfig,
};
pub use error::AppError;
pub use form_data::FormData;
pub use goal::{GoalType, LessonNumber, PROGRAM_LESSON_COUNT};
pub use methodology::{LessonType, Methodology, MethodologyAnswers};
pub use prompt::{
    PromptAssemblyError, PromptContext, PromptTemplate, TemplateRenderer, build_prompt,
};
pub use recommendation::{
    RecommendationData, RecommendationRow, RecommendationTable, TableKind, find_match,
};
pub use session::{Session, SessionId};
pub use wizard::{Stage, ValidationError, WizardEvent, WizardState, transition};

/// Directory holding lessonbot configuration and secrets.
pub const LESSONBOT_DIR: &str = ".lessonbot";
/// Configuration file name inside [`LESSONBOT_DIR`].
pub const CONFIG_FILE: &str = "config.toml";
/// Secrets file name inside [`LESSONBOT_DIR`].
pub const SECRETS_FILE: &str = "secrets.toml";
