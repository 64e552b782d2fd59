use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GenerationClient;

/// Generation client returning a canned response and recording every prompt.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    response: Result<String, String>,
}

impl FakeGenerationClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), response: Ok(response.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), response: Err(message.into()) }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone().map_err(|message| AppError::generation(message, Some(503)))
    }
}
