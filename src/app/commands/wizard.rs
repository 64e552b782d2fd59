//! Wizard render loop.
//!
//! Each pass loads the session, renders the form of its current stage, and
//! feeds the submission through the pure `transition` function.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, FormData, PromptAssemblyError, SessionId, Stage, TemplateRenderer, WizardEvent,
    build_prompt, transition,
};
use crate::ports::{GenerationClient, SessionStore, WizardPrompter};

/// Options for a wizard run.
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    /// Write every accepted lesson plan to this file (last one wins).
    pub output: Option<PathBuf>,
}

/// What happened during a wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSummary {
    pub session_id: SessionId,
    pub lessons_generated: usize,
    pub last_plan: Option<String>,
}

/// Drive the wizard for `session_id` until the user cancels or declines to restart.
pub fn execute<G, T, S, P>(
    ctx: &AppContext<G, T>,
    sessions: &mut S,
    prompter: &mut P,
    session_id: &SessionId,
    options: &WizardOptions,
) -> Result<WizardSummary, AppError>
where
    G: GenerationClient,
    T: TemplateRenderer,
    S: SessionStore,
    P: WizardPrompter,
{
    let mut summary =
        WizardSummary { session_id: session_id.clone(), lessons_generated: 0, last_plan: None };

    loop {
        let now = Utc::now();
        let purged = sessions.purge_expired(now);
        if purged > 0 {
            info!(purged, "expired idle sessions");
        }

        let state = sessions.get_or_create(session_id, now);
        prompter.begin_stage(state.stage);

        let event = match state.stage {
            Stage::Profile => prompter.ask_profile()?.map(|answers| WizardEvent::ProfileSubmitted {
                goal_type: answers.goal_type,
                lesson_number: answers.lesson_number,
            }),
            Stage::Blueprint => {
                prompter.ask_blueprint()?.map(|answers| WizardEvent::BlueprintSubmitted {
                    has_blueprint: answers.has_blueprint,
                    text: answers.text,
                })
            }
            Stage::LessonCore => prompter.ask_lesson_core()?.map(WizardEvent::LessonCoreSubmitted),
            Stage::Generation => {
                if let Some(plan) = render_plan(ctx, &state.form_data, prompter, options)? {
                    summary.lessons_generated += 1;
                    summary.last_plan = Some(plan);
                }
                prompter.ask_restart()?.then_some(WizardEvent::Restart)
            }
        };

        let Some(event) = event else {
            info!(session = %session_id, stage = %state.stage, "wizard closed");
            break;
        };

        match transition(&state, event) {
            Ok(next) => {
                info!(session = %session_id, from = %state.stage, to = %next.stage, "stage changed");
                sessions.save(session_id, next, Utc::now());
            }
            Err(err) => {
                warn!(session = %session_id, stage = %state.stage, error = %err, "submission rejected");
                prompter.report_invalid(&err);
                // Time spent on the form counts as activity even when the answer is rejected.
                sessions.save(session_id, state, Utc::now());
            }
        }
    }

    sessions.remove(session_id);
    Ok(summary)
}

/// Build the prompt, call the generation service once, and present the result.
///
/// Failures are reported through the prompter and yield `None`.
fn render_plan<G, T, P>(
    ctx: &AppContext<G, T>,
    form_data: &FormData,
    prompter: &mut P,
    options: &WizardOptions,
) -> Result<Option<String>, AppError>
where
    G: GenerationClient,
    T: TemplateRenderer,
    P: WizardPrompter,
{
    let Some(lesson_type) = form_data.lesson_type() else {
        prompter.report_failure(&PromptAssemblyError::MissingField("methodology").into());
        return Ok(None);
    };

    let plan = match build_prompt(form_data, ctx.renderer())
        .map_err(AppError::from)
        .and_then(|prompt| {
            info!(lesson_type = %lesson_type, chars = prompt.len(), "requesting lesson plan");
            ctx.client().generate(&prompt)
        }) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(error = %err, "lesson plan generation failed");
            prompter.report_failure(&err);
            return Ok(None);
        }
    };

    let plan = prompter.present_plan(&plan, lesson_type)?;

    if let Some(path) = &options.output {
        match fs::write(path, &plan) {
            Ok(()) => info!(path = %path.display(), "saved lesson plan"),
            Err(err) => prompter.report_failure(&AppError::from(err)),
        }
    }

    Ok(Some(plan))
}
