use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://api.generativeai.google.com/v1";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

use crate::models::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please select a section to generate questions")]
    NoSection,

    #[error(
        "Question count {0} is outside {MIN_QUESTION_COUNT}..={MAX_QUESTION_COUNT}"
    )]
    InvalidQuestionCount(u32),

    #[error("{API_KEY_ENV} is not set")]
    MissingApiKey,

    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned status {0}")]
    Status(u16),

    #[error("Malformed generation response: {0}")]
    MalformedBody(String),
}

/// Thin client for the text-generation service: one authenticated POST per
/// call, no retries, no streaming.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateTextRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateTextResponse {
    text: String,
}

impl GenAiClient {
    /// Build a client keyed from the environment.
    pub fn new() -> Result<Self, GenerateError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| GenerateError::MissingApiKey)?;
        Ok(Self::with_base_url(DEFAULT_BASE_URL, api_key))
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// POST `/models/{model}:generateText` and return the response `text`
    /// field. Any non-success status or transport failure is opaque to the
    /// caller; there is no structured error body to parse.
    pub async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/models/{}:generateText", self.base_url, model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&GenerateTextRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status.as_u16()));
        }

        let body: GenerateTextResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::MalformedBody(e.to_string()))?;

        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = GenAiClient::with_base_url("http://localhost:8080/", "key");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&GenerateTextRequest {
            prompt: "Generate 5 Easy questions on Page 1.",
        })
        .unwrap();
        assert_eq!(body, r#"{"prompt":"Generate 5 Easy questions on Page 1."}"#);
    }

    #[test]
    fn test_response_body_shape() {
        let body: GenerateTextResponse =
            serde_json::from_str(r#"{"text":"Q1\nQ2","other":"ignored"}"#).unwrap();
        assert_eq!(body.text, "Q1\nQ2");
    }
}
