//! Gemini text generation.
//!
//! The API key arrives with each request, so [`GeminiProvider`] only owns the
//! connection pool and hands out a [`GeminiModel`] bound to one credential.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeminiSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("API key is empty")]
    Empty,

    #[error("API key must not contain whitespace")]
    Whitespace,

    #[error("API key is not a valid header value: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(String),

    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse Gemini response: {0}")]
    Decode(String),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

/// A model client scoped to a single caller's credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Activates a caller-supplied credential into a usable model client.
#[cfg_attr(test, mockall::automock)]
pub trait ModelProvider: Send + Sync {
    fn connect(&self, credential: &str) -> Result<Box<dyn GenerativeModel>, CredentialError>;
}

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiProvider {
    pub fn new(settings: GeminiSettings) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, settings })
    }
}

impl ModelProvider for GeminiProvider {
    fn connect(&self, credential: &str) -> Result<Box<dyn GenerativeModel>, CredentialError> {
        let key = credential.trim();
        if key.is_empty() {
            return Err(CredentialError::Empty);
        }
        if key.chars().any(char::is_whitespace) {
            return Err(CredentialError::Whitespace);
        }

        let mut api_key =
            HeaderValue::from_str(key).map_err(|e| CredentialError::Malformed(e.to_string()))?;
        api_key.set_sensitive(true);

        Ok(Box::new(GeminiModel {
            client: self.client.clone(),
            url: format!(
                "{}/models/{}:generateContent",
                self.settings.api_base_url.trim_end_matches('/'),
                self.settings.model_name
            ),
            model_name: self.settings.model_name.clone(),
            api_key,
        }))
    }
}

pub struct GeminiModel {
    client: Client,
    url: String,
    model_name: String,
    api_key: HeaderValue,
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate_content(&self, prompt: &str) -> Result<String, ModelError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.model_name,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Api {
                status: status.as_u16(),
                body: error_body(response.text().await),
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        api_response.into_text()
    }
}

/// Body text of a failed call, or why it could not be read.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {}>", e))
}

// Gemini API request/response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, ModelError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ModelError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyResponse)?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return match candidate.finish_reason.as_deref() {
                Some("SAFETY") => Err(ModelError::Blocked("SAFETY".to_string())),
                _ => Err(ModelError::EmptyResponse),
            };
        }

        Ok(text)
    }
}
