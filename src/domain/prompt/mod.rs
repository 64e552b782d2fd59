pub mod builder;
pub mod template;

use std::collections::BTreeMap;

use thiserror::Error;

pub use builder::{HANDS_ON_GUIDE, build_prompt};
pub use template::{PromptTemplate, TemplateRenderer};

/// Variables made available to a prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub variables: BTreeMap<&'static str, String>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(name, value.into());
        self
    }
}

/// Errors raised while turning form data into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptAssemblyError {
    #[error("Cannot build a prompt before '{0}' has been provided")]
    MissingField(&'static str),

    #[error("Template '{template}' uses disallowed syntax '{token}'")]
    TemplateSyntaxNotAllowed { template: String, token: String },

    #[error("Failed to render template '{template}': {reason}")]
    TemplateRenderError { template: String, reason: String },
}
