//! API Facade for the application.
//!
//! Glues together configuration loading, adapter construction, and command
//! execution.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::csv_recommendation_store::CsvRecommendationStore;
use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::gemini_client_http::HttpGeminiClient;
use crate::adapters::memory_session_store::InMemorySessionStore;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::app::config::{load_api_key, load_config};
use crate::app::{
    AppContext,
    commands::{match_keyword, wizard},
};
use crate::domain::SessionId;
use crate::ports::{GenerationClient, PromptPreviewClient};

pub use crate::app::commands::match_keyword::MatchOutcome;
pub use crate::app::commands::wizard::{WizardOptions, WizardSummary};
pub use crate::domain::{AppError, TableKind};

/// Options for the interactive wizard.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Configuration file relative to the working directory.
    pub config: Option<PathBuf>,
    /// Secrets file relative to the working directory.
    pub secrets: Option<PathBuf>,
    /// Show the assembled prompt instead of calling the model.
    pub dry_run: bool,
    /// Write the final lesson plan to this file.
    pub output: Option<PathBuf>,
}

/// Run the lesson wizard in the current directory.
pub fn run_wizard(options: &RunOptions) -> Result<WizardSummary, AppError> {
    run_wizard_at(std::env::current_dir()?, options)
}

/// Run the lesson wizard with `root` as the working directory.
pub fn run_wizard_at(
    root: impl Into<PathBuf>,
    options: &RunOptions,
) -> Result<WizardSummary, AppError> {
    let root = root.into();
    let config = load_config(&root, options.config.as_deref())?;

    let client: Box<dyn GenerationClient> = if options.dry_run {
        info!("dry run: prompts are shown instead of sent");
        Box::new(PromptPreviewClient)
    } else {
        let api_key = load_api_key(&root, options.secrets.as_deref())?;
        Box::new(HttpGeminiClient::new(api_key, &config.gemini)?)
    };

    let mut sessions = InMemorySessionStore::new(config.session.idle_timeout());
    let mut prompter = DialoguerPrompter::new(config.advisor.url.clone());
    let ctx = AppContext::new(client, MinijinjaTemplateRenderer::new());

    let session_id = SessionId::generate();
    info!(session = %session_id, "starting wizard session");

    let wizard_options =
        WizardOptions { output: options.output.as_ref().map(|path| resolve(&root, path)) };
    wizard::execute(&ctx, &mut sessions, &mut prompter, &session_id, &wizard_options)
}

/// Look up `text` in the recommendation data of the current directory.
pub fn match_keyword(
    text: &str,
    table: TableKind,
    config: Option<&Path>,
) -> Result<MatchOutcome, AppError> {
    match_keyword_at(std::env::current_dir()?, text, table, config)
}

/// Look up `text` in the recommendation data under `root`.
pub fn match_keyword_at(
    root: impl Into<PathBuf>,
    text: &str,
    table: TableKind,
    config: Option<&Path>,
) -> Result<MatchOutcome, AppError> {
    let root = root.into();
    let config = load_config(&root, config)?;
    let store = CsvRecommendationStore::from_config(&root, &config.data);
    match_keyword::execute(&store, text, table)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
