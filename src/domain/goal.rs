//! Stage 0 answers: what kind of content is being created.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of the lesson program.
pub const PROGRAM_LESSON_COUNT: u8 = 12;

/// Content type chosen on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    SingleLesson,
    ProgramLesson,
}

impl GoalType {
    pub const ALL: [GoalType; 2] = [GoalType::SingleLesson, GoalType::ProgramLesson];

    /// User-facing label, also the stored value.
    pub fn label(self) -> &'static str {
        match self {
            GoalType::SingleLesson => "A Single Lesson (for 'additional classes')",
            GoalType::ProgramLesson => "A Lesson that is part of your 12-lesson program",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.label() == label)
    }

    /// Whether the goal asks for a position within the program.
    pub fn needs_lesson_number(self) -> bool {
        matches!(self, GoalType::ProgramLesson)
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a lesson inside the 12-lesson program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LessonNumber(u8);

impl LessonNumber {
    pub fn new(value: u8) -> Option<Self> {
        (1..=PROGRAM_LESSON_COUNT).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = LessonNumber> {
        (1..=PROGRAM_LESSON_COUNT).map(LessonNumber)
    }
}

impl TryFrom<u8> for LessonNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("lesson number must be between 1 and {PROGRAM_LESSON_COUNT}"))
    }
}

impl From<LessonNumber> for u8 {
    fn from(value: LessonNumber) -> Self {
        value.0
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
