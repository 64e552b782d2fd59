//! Prompt rendering with minijinja.
//!
//! Both embedded templates are compiled into one environment on first use.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::prompt::{PromptAssemblyError, PromptContext, PromptTemplate, TemplateRenderer};

static PROMPTS: OnceLock<Result<Environment<'static>, PromptAssemblyError>> = OnceLock::new();

/// Renders the embedded prompt templates. Variables are substituted verbatim;
/// a variable missing from the context is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: PromptTemplate,
        context: &PromptContext,
    ) -> Result<String, PromptAssemblyError> {
        let env = PROMPTS.get_or_init(prompt_environment).as_ref().map_err(|err| err.clone())?;

        env.get_template(template.name())
            .and_then(|compiled| compiled.render(&context.variables))
            .map_err(|err| render_error(template.name(), err))
    }
}

fn prompt_environment() -> Result<Environment<'static>, PromptAssemblyError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for template in PromptTemplate::ALL {
        check_substitution_only(template.name(), template.source())?;
        env.add_template(template.name(), template.source())
            .map_err(|err| render_error(template.name(), err))?;
    }
    Ok(env)
}

// Prompt templates are plain substitution: no blocks, no comments.
fn check_substitution_only(name: &str, source: &str) -> Result<(), PromptAssemblyError> {
    match ["{%", "{#"].into_iter().find(|token| source.contains(token)) {
        Some(token) => Err(PromptAssemblyError::TemplateSyntaxNotAllowed {
            template: name.to_string(),
            token: token.to_string(),
        }),
        None => Ok(()),
    }
}

fn render_error(name: &str, err: minijinja::Error) -> PromptAssemblyError {
    PromptAssemblyError::TemplateRenderError { template: name.to_string(), reason: err.to_string() }
}
