//! Upstream chat-completion client
//!
//! The API is treated as a black box that takes a system/user message pair
//! and returns free text. [`CompletionClient`] is the seam handlers depend
//! on; [`ChatCompletionClient`] talks to any OpenAI-compatible endpoint.

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::prompts::Prompt,
};

/// Trait for completion backends
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the prompt and returns the text of the first choice
    async fn complete(&self, prompt: &Prompt) -> AppResult<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Content of the first choice
    pub fn into_content(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::ExternalApi("Completion returned no choices".to_string()))
    }
}

#[derive(Clone)]
pub struct ChatCompletionClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl ChatCompletionClient {
    /// Creates a client whose calls are bounded by the configured timeout
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.groq_api_key.clone(),
            api_url: config.completion_api_url.clone(),
            model: config.completion_model.clone(),
        })
    }

    fn build_request(&self, prompt: &Prompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::new("system", &prompt.system),
                ChatMessage::new("user", &prompt.user),
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        }
    }
}

#[async_trait::async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, prompt: &Prompt) -> AppResult<String> {
        let payload = self.build_request(prompt);

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Completion API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion.into_content()?;

        tracing::debug!(
            model = %self.model,
            chars = content.len(),
            "Completion received"
        );

        Ok(content)
    }
}
