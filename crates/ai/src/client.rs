//! Generative-text client.
//!
//! One request, one response. The composer shows the officer a draft
//! they can edit before sending, so there is no value in streaming
//! partial text, and a failed call is surfaced rather than retried.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpGenerativeClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpGenerativeClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
            model: model.into(),
        })
    }
}

#[async_trait]
impl GenerativeClient for HttpGenerativeClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        debug!("Requesting completion from {}", self.endpoint);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AiError::provider(format!(
                "endpoint returned {status}"
            )));
        }
        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::provider(format!("bad response payload: {e}")))?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AiError::provider("response carried no choices"))?;
        Ok(text.trim().to_string())
    }
}
