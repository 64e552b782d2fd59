use super::{PromptAssemblyError, PromptContext};

/// The prompt templates shipped with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    Educational,
    HandsOn,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 2] = [PromptTemplate::Educational, PromptTemplate::HandsOn];

    pub fn name(self) -> &'static str {
        match self {
            PromptTemplate::Educational => "educational.md.j2",
            PromptTemplate::HandsOn => "hands_on.md.j2",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            PromptTemplate::Educational => include_str!("../../assets/prompts/educational.md.j2"),
            PromptTemplate::HandsOn => include_str!("../../assets/prompts/hands_on.md.j2"),
        }
    }
}

/// Trait for rendering prompt templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    fn render(
        &self,
        template: PromptTemplate,
        context: &PromptContext,
    ) -> Result<String, PromptAssemblyError>;
}
