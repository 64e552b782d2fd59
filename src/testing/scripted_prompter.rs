use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, LessonType, MethodologyAnswers, Stage, ValidationError};
use crate::ports::{BlueprintAnswers, ProfileAnswers, WizardPrompter};

/// One scripted user action. The prompter cancels once the script runs out.
#[derive(Debug, Clone)]
pub enum Step {
    Profile(ProfileAnswers),
    Blueprint(BlueprintAnswers),
    LessonCore(MethodologyAnswers),
    Restart(bool),
}

/// Prompter that replays a fixed script and records what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Step>,
    pub stages: Vec<Stage>,
    pub invalid: Vec<ValidationError>,
    pub failures: Vec<String>,
    pub presented: Vec<(String, LessonType)>,
    /// Replaces the presented plan, as if the user edited it.
    pub edit_to: Option<String>,
    /// Time each answer takes to arrive, as if the user were typing.
    pub delay: Option<Duration>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self { script: script.into_iter().collect(), ..Self::default() }
    }

    fn next_step(&mut self) -> Option<Step> {
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        self.script.pop_front()
    }
}

impl WizardPrompter for ScriptedPrompter {
    fn begin_stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    fn ask_profile(&mut self) -> Result<Option<ProfileAnswers>, AppError> {
        match self.next_step() {
            Some(Step::Profile(answers)) => Ok(Some(answers)),
            Some(other) => panic!("expected profile step, got {:?}", other),
            None => Ok(None),
        }
    }

    fn ask_blueprint(&mut self) -> Result<Option<BlueprintAnswers>, AppError> {
        match self.next_step() {
            Some(Step::Blueprint(answers)) => Ok(Some(answers)),
            Some(other) => panic!("expected blueprint step, got {:?}", other),
            None => Ok(None),
        }
    }

    fn ask_lesson_core(&mut self) -> Result<Option<MethodologyAnswers>, AppError> {
        match self.next_step() {
            Some(Step::LessonCore(answers)) => Ok(Some(answers)),
            Some(other) => panic!("expected lesson core step, got {:?}", other),
            None => Ok(None),
        }
    }

    fn report_invalid(&mut self, error: &ValidationError) {
        self.invalid.push(error.clone());
    }

    fn report_failure(&mut self, error: &AppError) {
        self.failures.push(error.to_string());
    }

    fn present_plan(&mut self, plan: &str, lesson_type: LessonType) -> Result<String, AppError> {
        self.presented.push((plan.to_string(), lesson_type));
        Ok(self.edit_to.clone().unwrap_or_else(|| plan.to_string()))
    }

    fn ask_restart(&mut self) -> Result<bool, AppError> {
        match self.next_step() {
            Some(Step::Restart(restart)) => Ok(restart),
            Some(other) => panic!("expected restart step, got {:?}", other),
            None => Ok(false),
        }
    }
}
