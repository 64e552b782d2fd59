//! Text generation service port definition.

use crate::domain::AppError;

/// Port for the remote text-generation service.
///
/// Each call is independent: no conversation state is kept between calls.
pub trait GenerationClient {
    /// Send `prompt` and return the generated text verbatim.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}

/// Client that echoes the assembled prompt instead of calling the service.
#[derive(Debug, Clone, Default)]
pub struct PromptPreviewClient;

impl GenerationClient for PromptPreviewClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        Ok(prompt.to_string())
    }
}
