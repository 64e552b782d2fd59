use serde::{Deserialize, Serialize};

use crate::domain::{GoalType, LessonNumber, LessonType, Methodology};

/// Answers accumulated across wizard stages.
///
/// Fields are only ever added; a full reset replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<LessonNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", flatten)]
    pub methodology: Option<Methodology>,
}

impl FormData {
    pub fn lesson_type(&self) -> Option<LessonType> {
        self.methodology.as_ref().map(Methodology::lesson_type)
    }

    pub fn is_empty(&self) -> bool {
        *self == FormData::default()
    }
}
