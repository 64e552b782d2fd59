//! Terminal forms for the wizard, built on dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Editor, Error as DialoguerError, Input, Select};
use url::Url;

use crate::domain::prompt::HANDS_ON_GUIDE;
use crate::domain::{
    AppError, GoalType, LessonNumber, LessonType, MethodologyAnswers, Stage, ValidationError,
};
use crate::ports::{BlueprintAnswers, ProfileAnswers, WizardPrompter};

const HAS_BLUEPRINT: &str = "Yes, I have it";
const NEEDS_BLUEPRINT: &str = "No, I need to create one";

/// Interactive prompter for a real terminal.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter {
    advisor_url: Option<Url>,
}

impl DialoguerPrompter {
    pub fn new(advisor_url: Option<Url>) -> Self {
        Self { advisor_url }
    }
}

impl WizardPrompter for DialoguerPrompter {
    fn begin_stage(&mut self, stage: Stage) {
        if stage == Stage::Profile {
            println!();
            println!("Welcome to the Lesson Creation Bot!");
            println!(
                "✍️  This bot acts as your personal instructional designer, guiding you from a high-level idea to a complete, ready-to-film lesson plan."
            );
        }

        let heading = match stage {
            Stage::Generation => format!("✅ {}", stage.heading()),
            _ => stage.heading().to_string(),
        };
        println!();
        println!("{}", heading);
        println!("{}", "─".repeat(heading.chars().count()));

        if stage == Stage::Generation {
            println!("Your personal instructional designer is building your lesson plan...");
        }
    }

    fn ask_profile(&mut self) -> Result<Option<ProfileAnswers>, AppError> {
        let labels: Vec<&str> = GoalType::ALL.iter().map(|goal| goal.label()).collect();
        let Some(index) = select("Select the type of content you are creating", &labels)? else {
            return Ok(None);
        };
        let goal_type = GoalType::ALL[index];

        let mut lesson_number = None;
        if goal_type.needs_lesson_number() {
            let numbers: Vec<String> = LessonNumber::all().map(|n| n.to_string()).collect();
            let Some(index) = select("Which lesson of the program are you working on?", &numbers)?
            else {
                return Ok(None);
            };
            lesson_number = LessonNumber::all().nth(index).map(LessonNumber::get);
        }

        Ok(Some(ProfileAnswers { goal_type: Some(goal_type), lesson_number }))
    }

    fn ask_blueprint(&mut self) -> Result<Option<BlueprintAnswers>, AppError> {
        let Some(index) = select(
            "Do you have your 'Program Blueprint' from the Program Advisor Bot?",
            &[HAS_BLUEPRINT, NEEDS_BLUEPRINT],
        )?
        else {
            return Ok(None);
        };

        if index == 1 {
            return Ok(Some(BlueprintAnswers { has_blueprint: false, text: String::new() }));
        }

        let text = read_text_area(
            "Great! Please paste the full 'Program Blueprint' you received (opens your editor).",
            None,
        )?;
        Ok(text.map(|text| BlueprintAnswers { has_blueprint: true, text }))
    }

    fn ask_lesson_core(&mut self) -> Result<Option<MethodologyAnswers>, AppError> {
        let labels: Vec<&str> = LessonType::ALL.iter().map(|kind| kind.choice_label()).collect();
        let Some(index) = select("What type of lesson are you creating?", &labels)? else {
            return Ok(None);
        };

        match LessonType::ALL[index] {
            LessonType::Educational => ask_educational(),
            LessonType::HandsOn => ask_hands_on(),
        }
    }

    fn report_invalid(&mut self, error: &ValidationError) {
        eprintln!("❌ {}", error);
        if matches!(error, ValidationError::BlueprintNeeded) {
            if let Some(url) = &self.advisor_url {
                eprintln!("   Go to Program Advisor Bot: {}", url);
            }
        }
    }

    fn report_failure(&mut self, error: &AppError) {
        eprintln!("🔥 {}", error);
    }

    fn present_plan(&mut self, plan: &str, lesson_type: LessonType) -> Result<String, AppError> {
        println!();
        println!("{}", plan);
        println!();
        println!("📋 You can now edit your lesson plan and copy the text for your records.");

        let edit = Confirm::new()
            .with_prompt("Edit the lesson plan?")
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to read answer: {}", err)))?
            .unwrap_or(false);

        let final_plan = if edit {
            Editor::new()
                .extension(".md")
                .edit(plan)
                .map_err(|err| AppError::Prompt(format!("Failed to open editor: {}", err)))?
                .unwrap_or_else(|| plan.to_string())
        } else {
            plan.to_string()
        };

        if lesson_type == LessonType::HandsOn {
            println!();
            println!("💡 {}", HANDS_ON_GUIDE.trim_end());
        }

        Ok(final_plan)
    }

    fn ask_restart(&mut self) -> Result<bool, AppError> {
        Ok(Confirm::new()
            .with_prompt("Create Another Lesson?")
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to read answer: {}", err)))?
            .unwrap_or(false))
    }
}

fn ask_educational() -> Result<Option<MethodologyAnswers>, AppError> {
    let Some(core_question) = read_text_area(
        "The Core Question: What is the one key question this lesson will answer for your student?",
        Some("Why does my skin get oily in the afternoon?"),
    )?
    else {
        return Ok(None);
    };
    let Some(teaching_points) = read_text_area(
        "Key Teaching Points: What are the 3 most important points or takeaways you will teach?",
        Some("1. The role of sebum production..."),
    )?
    else {
        return Ok(None);
    };
    let Some(analogy) = read_line(
        "Core Analogy: What is a simple analogy or real-world example you can use?",
        Some("Think of your skin like a plant that needs water..."),
    )?
    else {
        return Ok(None);
    };
    let Some(actionable_tip) = read_line(
        "Actionable Tip: What is one simple tip the student can apply immediately?",
        Some("Try adding a hydrating serum before your moisturizer..."),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(MethodologyAnswers::Educational { core_question, teaching_points, analogy, actionable_tip }))
}

fn ask_hands_on() -> Result<Option<MethodologyAnswers>, AppError> {
    let Some(outcome) = read_line(
        "The Specific Outcome: What tangible, physical result will the student achieve?",
        Some("A visibly lifted jawline after a 5-minute guasha routine."),
    )?
    else {
        return Ok(None);
    };
    let Some(steps) = read_text_area(
        "Critical Steps: What are the 3-5 most critical physical steps or movements?",
        Some("1. Prepping skin with oil..."),
    )?
    else {
        return Ok(None);
    };
    let Some(mistake) = read_line(
        "The Common Mistake: What is the number one mistake beginners make?",
        Some("Using too much pressure. It should be gentle..."),
    )?
    else {
        return Ok(None);
    };
    let Some(tools) = read_line(
        "Required Tools: What specific tools and products must the student have ready?",
        Some("A clean guasha tool and facial oil."),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(MethodologyAnswers::HandsOn { outcome, steps, mistake, tools }))
}

fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Selection failed: {}", err)))
}

/// Single-line answer. Blank answers are allowed; the wizard validates them.
fn read_line(prompt: &str, example: Option<&str>) -> Result<Option<String>, AppError> {
    let prompt = with_example(prompt, example);
    let answer = Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text();
    cancellable(answer, "Failed to read answer")
}

/// Multi-line answer captured in the user's editor. Closing without saving yields "".
fn read_text_area(prompt: &str, example: Option<&str>) -> Result<Option<String>, AppError> {
    println!("{}", with_example(prompt, example));
    let answer = Editor::new().extension(".md").edit("");
    Ok(cancellable(answer, "Failed to open editor")?.map(Option::unwrap_or_default))
}

/// Ctrl-C surfaces as an interrupted read; treat it as cancelling the form.
fn cancellable<T>(answer: Result<T, DialoguerError>, context: &str) -> Result<Option<T>, AppError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("{}: {}", context, err))),
    }
}

fn with_example(prompt: &str, example: Option<&str>) -> String {
    match example {
        Some(example) => format!("{} (e.g., {})", prompt, example),
        None => prompt.to_string(),
    }
}
