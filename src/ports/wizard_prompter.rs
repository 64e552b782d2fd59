//! Interactive form port used by the wizard driver.
//!
//! Every `ask_*` method returns `Ok(None)` when the user cancels, which ends
//! the wizard.

use crate::domain::{
    AppError, GoalType, LessonType, MethodologyAnswers, Stage, ValidationError,
};

/// Stage 0 form answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAnswers {
    pub goal_type: Option<GoalType>,
    pub lesson_number: Option<u8>,
}

/// Stage 1 form answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintAnswers {
    pub has_blueprint: bool,
    pub text: String,
}

pub trait WizardPrompter {
    /// Show the heading of the stage about to be rendered.
    fn begin_stage(&mut self, stage: Stage);

    fn ask_profile(&mut self) -> Result<Option<ProfileAnswers>, AppError>;

    fn ask_blueprint(&mut self) -> Result<Option<BlueprintAnswers>, AppError>;

    fn ask_lesson_core(&mut self) -> Result<Option<MethodologyAnswers>, AppError>;

    /// Report a rejected submission inline.
    fn report_invalid(&mut self, error: &ValidationError);

    /// Report a failure to build or generate the plan.
    fn report_failure(&mut self, error: &AppError);

    /// Show the generated plan for editing and return the final text.
    fn present_plan(&mut self, plan: &str, lesson_type: LessonType) -> Result<String, AppError>;

    /// Ask whether to start over ("Create Another Lesson").
    fn ask_restart(&mut self) -> Result<bool, AppError>;
}
