//! Shared testing utilities for lessonbot CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::env;
use std::path::Path;

pub const RECOMMENDATIONS_CSV: &str = "\
problem_keyword,audience,lesson_idea
acne,Teens with breakouts,Build a gentle cleansing routine
dry skin,Adults in cold climates,Layering moisture
";

pub const PROBLEM_RECOMMENDATIONS_CSV: &str = "\
problem_keyword,audience,lesson_idea
puffy,Busy parents,Morning de-puffing in five minutes
,Nobody,Rows without a keyword never match
";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    work_dir: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let work_dir = TempDir::new().expect("Failed to create temp directory for tests");
        Self { work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.path()
    }

    /// Build a command for invoking the compiled `lessonbot` binary in the work directory.
    ///
    /// The credential and log filter are cleared so the host environment cannot leak in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("lessonbot").expect("Failed to locate lessonbot binary");
        cmd.current_dir(self.work_dir()).env_remove("GEMINI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Write both recommendation tables under their default names.
    pub fn write_default_data(&self) {
        self.write_file("recommendations_final.csv", RECOMMENDATIONS_CSV);
        self.write_file("problem_recommendations_final.csv", PROBLEM_RECOMMENDATIONS_CSV);
    }

    /// Write `.lessonbot/config.toml`.
    pub fn write_config(&self, content: &str) {
        self.write_file(".lessonbot/config.toml", content);
    }

    /// Write a file relative to the work directory.
    pub fn write_file(&self, relative: &str, content: &str) {
        self.work_dir.child(relative).write_str(content).expect("Failed to write fixture");
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(self.work_dir()).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}
