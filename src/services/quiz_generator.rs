use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    models::domain::GenerationRequest,
    services::model_service::TextModel,
};

/// Turns source text into the model's raw quiz text. Output is trimmed but
/// not parsed.
pub struct QuizGenerator {
    model: Arc<dyn TextModel>,
    model_name: String,
    credential: SecretString,
    max_source_chars: usize,
}

impl QuizGenerator {
    pub fn new(
        model: Arc<dyn TextModel>,
        model_name: impl Into<String>,
        credential: SecretString,
        max_source_chars: usize,
    ) -> Self {
        Self {
            model,
            model_name: model_name.into(),
            credential,
            max_source_chars,
        }
    }

    pub async fn generate(&self, source_text: &str, question_count: u32) -> AppResult<String> {
        if question_count == 0 {
            return Err(AppError::ValidationError(
                "question count must be at least 1".to_string(),
            ));
        }

        let request = GenerationRequest::new(
            source_text,
            self.max_source_chars,
            question_count,
            self.model_name.clone(),
            self.credential.clone(),
        );

        let raw = self.model.generate(&request).await?;
        Ok(raw.trim().to_string())
    }
}
