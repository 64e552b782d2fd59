use crate::domain::TemplateRenderer;
use crate::ports::GenerationClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GenerationClient, T: TemplateRenderer> {
    client: G,
    renderer: T,
}

impl<G: GenerationClient, T: TemplateRenderer> AppContext<G, T> {
    /// Create a new application context.
    pub fn new(client: G, renderer: T) -> Self {
        Self { client, renderer }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Get a reference to the prompt template renderer.
    pub fn renderer(&self) -> &T {
        &self.renderer
    }
}
