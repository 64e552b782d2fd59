//! Prompt assembly from collected wizard answers.

use super::{PromptAssemblyError, PromptContext, PromptTemplate, TemplateRenderer};
use crate::domain::{FormData, Methodology};

/// Usage notes shown after a hands-on plan. Not part of the prompt.
pub static HANDS_ON_GUIDE: &str = include_str!("../../assets/prompts/hands_on_guide.md");

/// Build the generation prompt for the lesson described by `form_data`.
///
/// The template is chosen by the methodology variant; every answer is embedded verbatim.
pub fn build_prompt<R: TemplateRenderer + ?Sized>(
    form_data: &FormData,
    renderer: &R,
) -> Result<String, PromptAssemblyError> {
    let blueprint =
        form_data.blueprint.as_deref().ok_or(PromptAssemblyError::MissingField("blueprint"))?;
    let methodology =
        form_data.methodology.as_ref().ok_or(PromptAssemblyError::MissingField("methodology"))?;

    let context = PromptContext::new().with_var("blueprint", blueprint);
    let (template, context) = match methodology {
        Methodology::Educational { core_question, teaching_points, analogy, actionable_tip } => (
            PromptTemplate::Educational,
            context
                .with_var("core_question", core_question)
                .with_var("teaching_points", teaching_points)
                .with_var("analogy", analogy)
                .with_var("actionable_tip", actionable_tip),
        ),
        Methodology::HandsOn { outcome, steps, mistake, tools } => (
            PromptTemplate::HandsOn,
            context
                .with_var("outcome", outcome)
                .with_var("steps", steps)
                .with_var("mistake", mistake)
                .with_var("tools", tools),
        ),
    };

    renderer.render(template, &context)
}
