mod generation_client;
mod recommendation_source;
mod session_store;
mod wizard_prompter;

pub use generation_client::{GenerationClient, PromptPreviewClient};
pub use recommendation_source::RecommendationSource;
pub use session_store::SessionStore;
pub use wizard_prompter::{BlueprintAnswers, ProfileAnswers, WizardPrompter};
