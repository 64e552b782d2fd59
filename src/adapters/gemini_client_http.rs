//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::domain::{ApiKey, AppError, GeminiApiConfig};
use crate::ports::GenerationClient;

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini API.
///
/// One request per call. No retry, no caching.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: ApiKey,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: ApiKey, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::generation(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_key, endpoint: config.generate_content_url()?, client })
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        debug!(endpoint = %self.endpoint, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::generation(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::generation(format!("Failed to parse response: {}", e), Some(status.as_u16()))
            })?;

            let text = api_response.into_text().map_err(|reason| {
                AppError::generation(reason, Some(status.as_u16()))
            })?;
            info!(chars = text.len(), "received generated text");
            return Ok(text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::generation(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, String> {
        let block_reason = self.prompt_feedback.and_then(|feedback| feedback.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => format!("Prompt was blocked ({})", reason),
                None => "No candidates in response".to_string(),
            });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(format!("Response contained no text (finish reason: {})", reason));
        }
        Ok(text)
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = ApiRequest { contents: vec![Content { parts: vec![Part { text: prompt }] }] };
        self.send_request(&request)
    }
}
