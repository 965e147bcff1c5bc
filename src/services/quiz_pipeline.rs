use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{PublishPayload, PublishedQuiz, QuizQuestion, TopScorer},
    services::{
        document_service::{extract_text, DocumentKind, UploadedDocument},
        form_service::FormService,
        json_extractor::extract_questions,
        quiz_generator::QuizGenerator,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    ExtractText,
    GenerateQuiz,
    RecoverQuestions,
    PublishForm,
}

impl PipelineStep {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStep::ExtractText => "extract_text",
            PipelineStep::GenerateQuiz => "generate_quiz",
            PipelineStep::RecoverQuestions => "recover_questions",
            PipelineStep::PublishForm => "publish_form",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuizOptions {
    pub question_count: u32,
    pub title: Option<String>,
    pub quiz_id: Option<String>,
}

/// Document in, published form out. Every step either succeeds or stops
/// the run; nothing is retried or rolled back.
pub struct QuizPipeline {
    generator: QuizGenerator,
    forms: Arc<dyn FormService>,
    default_title: String,
}

impl QuizPipeline {
    pub fn new(
        generator: QuizGenerator,
        forms: Arc<dyn FormService>,
        default_title: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            forms,
            default_title: default_title.into(),
        }
    }

    pub async fn run(
        &self,
        document: UploadedDocument,
        options: QuizOptions,
    ) -> AppResult<PublishedQuiz> {
        // Unsupported uploads stop here, before any network call.
        let kind = DocumentKind::from_content_type(&document.content_type)?;
        let quiz_id = options
            .quiz_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        log::info!(
            "Executing {} step for quiz {} ({:?}, {} bytes)",
            PipelineStep::ExtractText.name(),
            quiz_id,
            kind,
            document.bytes.len()
        );
        let bytes = document.bytes;
        let text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
            .await
            .map_err(|e| AppError::InternalError(format!("Text extraction task failed: {}", e)))??;

        log::info!(
            "Executing {} step for quiz {}",
            PipelineStep::GenerateQuiz.name(),
            quiz_id
        );
        let model_output = self
            .generator
            .generate(&text, options.question_count)
            .await?;

        log::info!(
            "Executing {} step for quiz {}",
            PipelineStep::RecoverQuestions.name(),
            quiz_id
        );
        let questions = extract_questions(&model_output).map_err(|e| {
            log::warn!("No quiz could be recovered for quiz {}: {}", quiz_id, e);
            e
        })?;
        if questions.len() != options.question_count as usize {
            log::warn!(
                "Model returned {} questions for quiz {}, {} were requested",
                questions.len(),
                quiz_id,
                options.question_count
            );
        }
        let malformed = questions
            .iter()
            .filter(|item| !QuizQuestion::from_value(item).is_some_and(|q| q.is_well_formed()))
            .count();
        if malformed > 0 {
            log::warn!(
                "{} of {} questions for quiz {} are not well-formed, publishing as returned",
                malformed,
                questions.len(),
                quiz_id
            );
        }

        log::info!(
            "Executing {} step for quiz {}",
            PipelineStep::PublishForm.name(),
            quiz_id
        );
        let payload = PublishPayload {
            title: options.title.unwrap_or_else(|| self.default_title.clone()),
            questions,
            quiz_id,
        };
        let form_url = self.forms.publish(&payload).await?;

        log::info!("Successfully published quiz {} at {}", payload.quiz_id, form_url);

        Ok(PublishedQuiz {
            quiz_id: payload.quiz_id,
            form_url,
            question_count: payload.questions.len(),
            model_output,
            created_at: Utc::now(),
        })
    }

    pub async fn top_scorer(&self, quiz_id: Option<String>) -> AppResult<TopScorer> {
        self.forms.top_scorer(quiz_id).await
    }
}
