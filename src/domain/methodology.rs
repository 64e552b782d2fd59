//! Lesson sub-types and the answers each one requires.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pedagogical sub-type of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonType {
    #[serde(rename = "Educational")]
    Educational,
    #[serde(rename = "Hands-on")]
    HandsOn,
}

impl LessonType {
    pub const ALL: [LessonType; 2] = [LessonType::Educational, LessonType::HandsOn];

    /// Stored value.
    pub fn as_str(self) -> &'static str {
        match self {
            LessonType::Educational => "Educational",
            LessonType::HandsOn => "Hands-on",
        }
    }

    /// Label shown on the lesson core form.
    pub fn choice_label(self) -> &'static str {
        match self {
            LessonType::Educational => "An Educational Lesson (explaining a concept)",
            LessonType::HandsOn => "A Hands-on Tutorial (a practical, follow-along guide)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated answers from the lesson core form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodologyAnswers {
    Educational {
        core_question: String,
        teaching_points: String,
        analogy: String,
        actionable_tip: String,
    },
    HandsOn {
        outcome: String,
        steps: String,
        mistake: String,
        tools: String,
    },
}

impl MethodologyAnswers {
    pub fn lesson_type(&self) -> LessonType {
        match self {
            MethodologyAnswers::Educational { .. } => LessonType::Educational,
            MethodologyAnswers::HandsOn { .. } => LessonType::HandsOn,
        }
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        match self {
            MethodologyAnswers::Educational {
                core_question,
                teaching_points,
                analogy,
                actionable_tip,
            } => [
                ("core_question", core_question.as_str()),
                ("teaching_points", teaching_points.as_str()),
                ("analogy", analogy.as_str()),
                ("actionable_tip", actionable_tip.as_str()),
            ],
            MethodologyAnswers::HandsOn { outcome, steps, mistake, tools } => [
                ("outcome", outcome.as_str()),
                ("steps", steps.as_str()),
                ("mistake", mistake.as_str()),
                ("tools", tools.as_str()),
            ],
        }
    }

    /// Names of the required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Validated methodology. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "lesson_type", content = "methodology")]
pub enum Methodology {
    #[serde(rename = "Educational")]
    Educational {
        core_question: String,
        teaching_points: String,
        analogy: String,
        actionable_tip: String,
    },
    #[serde(rename = "Hands-on")]
    HandsOn { outcome: String, steps: String, mistake: String, tools: String },
}

impl Methodology {
    /// Validate raw answers, returning the blank field names on failure.
    pub fn from_answers(answers: MethodologyAnswers) -> Result<Self, Vec<&'static str>> {
        let missing = answers.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(match answers {
            MethodologyAnswers::Educational {
                core_question,
                teaching_points,
                analogy,
                actionable_tip,
            } => Methodology::Educational { core_question, teaching_points, analogy, actionable_tip },
            MethodologyAnswers::HandsOn { outcome, steps, mistake, tools } => {
                Methodology::HandsOn { outcome, steps, mistake, tools }
            }
        })
    }

    pub fn lesson_type(&self) -> LessonType {
        match self {
            Methodology::Educational { .. } => LessonType::Educational,
            Methodology::HandsOn { .. } => LessonType::HandsOn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn educational(q: &str) -> MethodologyAnswers {
        MethodologyAnswers::Educational {
            core_question: q.into(),
            teaching_points: "1. Sebum".into(),
            analogy: "A plant".into(),
            actionable_tip: "Hydrate".into(),
        }
    }

    #[test]
    fn complete_answers_validate() {
        let methodology = Methodology::from_answers(educational("Why oily?")).unwrap();
        assert_eq!(methodology.lesson_type(), LessonType::Educational);
    }

    #[test]
    fn blank_fields_are_reported_by_name() {
        let answers = MethodologyAnswers::HandsOn {
            outcome: "Lifted jawline".into(),
            steps: "   ".into(),
            mistake: String::new(),
            tools: "Guasha".into(),
        };
        assert_eq!(Methodology::from_answers(answers).unwrap_err(), vec!["steps", "mistake"]);
    }

    #[test]
    fn lesson_type_parses_stored_values_only() {
        assert_eq!(LessonType::parse("Educational"), Some(LessonType::Educational));
        assert_eq!(LessonType::parse("Hands-on"), Some(LessonType::HandsOn));
        assert_eq!(LessonType::parse("Workshop"), None);
    }

    #[test]
    fn serializes_with_lesson_type_tag() {
        let methodology = Methodology::from_answers(educational("Why?")).unwrap();
        let json = serde_json::to_value(&methodology).unwrap();
        assert_eq!(json["lesson_type"], "Educational");
        assert_eq!(json["methodology"]["core_question"], "Why?");
    }
}
