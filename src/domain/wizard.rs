//! Wizard finite-state machine.
//!
//! `transition` is a pure function of the current state and a submitted event;
//! rendering and I/O live in `app::commands::wizard`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FormData, GoalType, LessonNumber, Methodology, MethodologyAnswers};

/// Wizard stage, in presentation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stage {
    #[default]
    Profile,
    Blueprint,
    LessonCore,
    Generation,
}

impl Stage {
    pub fn index(self) -> u8 {
        match self {
            Stage::Profile => 0,
            Stage::Blueprint => 1,
            Stage::LessonCore => 2,
            Stage::Generation => 3,
        }
    }

    fn next(self) -> Option<Stage> {
        match self {
            Stage::Profile => Some(Stage::Blueprint),
            Stage::Blueprint => Some(Stage::LessonCore),
            Stage::LessonCore => Some(Stage::Generation),
            Stage::Generation => None,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Stage::Profile => "Step 1: What would you like to create now?",
            Stage::Blueprint => "Step 2: Import Your Blueprint",
            Stage::LessonCore => "Step 3: Define the Lesson's Core",
            Stage::Generation => "Your Complete Lesson Plan",
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> Self {
        stage.index()
    }
}

impl TryFrom<u8> for Stage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Stage::Profile),
            1 => Ok(Stage::Blueprint),
            2 => Ok(Stage::LessonCore),
            3 => Ok(Stage::Generation),
            other => Err(format!("unknown stage {other}")),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Complete state of one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub stage: Stage,
    pub form_data: FormData,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A form submission or explicit user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    ProfileSubmitted { goal_type: Option<GoalType>, lesson_number: Option<u8> },
    BlueprintSubmitted { has_blueprint: bool, text: String },
    LessonCoreSubmitted(MethodologyAnswers),
    Restart,
}

impl WizardEvent {
    fn name(&self) -> &'static str {
        match self {
            WizardEvent::ProfileSubmitted { .. } => "profile",
            WizardEvent::BlueprintSubmitted { .. } => "blueprint",
            WizardEvent::LessonCoreSubmitted(_) => "lesson core",
            WizardEvent::Restart => "restart",
        }
    }
}

/// Reasons a submission is rejected. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a content type to continue.")]
    GoalTypeRequired,

    #[error("Please choose which lesson of the program you are working on.")]
    LessonNumberRequired,

    #[error("Lesson number {0} is outside the 12-lesson program.")]
    LessonNumberOutOfRange(u8),

    #[error(
        "No problem! A blueprint is essential for the best results. Please visit our Program Advisor Bot to create your plan. Once you have it, please come back here to continue."
    )]
    BlueprintNeeded,

    #[error("Please paste your blueprint to continue.")]
    BlueprintRequired,

    #[error("Please fill in all fields to continue. Missing: {}", missing.join(", "))]
    IncompleteMethodology { missing: Vec<&'static str> },

    #[error("A {event} submission is not accepted at stage {stage}.")]
    UnexpectedEvent { stage: Stage, event: &'static str },
}

/// Apply `event` to `state`, producing the next state.
pub fn transition(state: &WizardState, event: WizardEvent) -> Result<WizardState, ValidationError> {
    if matches!(event, WizardEvent::Restart) {
        return Ok(WizardState::new());
    }

    let mut form_data = state.form_data.clone();
    match (state.stage, event) {
        (Stage::Profile, WizardEvent::ProfileSubmitted { goal_type, lesson_number }) => {
            let goal_type = goal_type.ok_or(ValidationError::GoalTypeRequired)?;
            let lesson_number = if goal_type.needs_lesson_number() {
                let raw = lesson_number.ok_or(ValidationError::LessonNumberRequired)?;
                Some(LessonNumber::new(raw).ok_or(ValidationError::LessonNumberOutOfRange(raw))?)
            } else {
                None
            };

            form_data.goal_type = Some(goal_type);
            if lesson_number.is_some() {
                form_data.lesson_number = lesson_number;
            }
        }
        (Stage::Blueprint, WizardEvent::BlueprintSubmitted { has_blueprint, text }) => {
            if !has_blueprint {
                return Err(ValidationError::BlueprintNeeded);
            }
            if text.trim().is_empty() {
                return Err(ValidationError::BlueprintRequired);
            }
            form_data.blueprint = Some(text);
        }
        (Stage::LessonCore, WizardEvent::LessonCoreSubmitted(answers)) => {
            let methodology = Methodology::from_answers(answers)
                .map_err(|missing| ValidationError::IncompleteMethodology { missing })?;
            form_data.methodology = Some(methodology);
        }
        (stage, event) => {
            return Err(ValidationError::UnexpectedEvent { stage, event: event.name() });
        }
    }

    let stage = state.stage.next().unwrap_or(state.stage);
    Ok(WizardState { stage, form_data })
}
