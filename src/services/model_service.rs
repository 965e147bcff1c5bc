use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    errors::{AppError, AppResult},
    models::domain::GenerationRequest,
};

/// A text-generation backend: prompt in, free-form text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

fn first_message_text(completion: ChatCompletion) -> AppResult<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::Generation("model returned no content".to_string()))
}

/// Chat-completions client for any OpenAI-compatible endpoint, Gemini's
/// included.
pub struct OpenAiTextModel {
    api_base: String,
}

impl OpenAiTextModel {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

#[async_trait]
impl TextModel for OpenAiTextModel {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        let config = OpenAIConfig::new()
            .with_api_base(self.api_base.clone())
            .with_api_key(request.credential.expose_secret());
        let client = Client::with_config(config);

        let body = json!({
            "model": request.model,
            "messages": [
                { "role": "user", "content": request.prompt() }
            ]
        });

        log::info!(
            "Requesting {} questions from model {} ({} source chars)",
            request.question_count,
            request.model,
            request.source_text.chars().count()
        );

        let completion: ChatCompletion = client.chat().create_byot(body).await.map_err(|e| {
            log::error!("Model call failed: {}", e);
            AppError::from(e)
        })?;

        first_message_text(completion)
    }
}
