mod fake_generation_client;
mod scripted_prompter;

pub use fake_generation_client::FakeGenerationClient;
pub use scripted_prompter::{ScriptedPrompter, Step};
