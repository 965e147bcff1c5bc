use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        form_service::{FormService, HttpFormService},
        model_service::{OpenAiTextModel, TextModel},
        quiz_generator::QuizGenerator,
        quiz_pipeline::QuizPipeline,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_pipeline: Arc<QuizPipeline>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let model: Arc<dyn TextModel> = Arc::new(OpenAiTextModel::new(config.model_api_base.clone()));
        let forms: Arc<dyn FormService> =
            Arc::new(HttpFormService::new(config.form_service_url.clone()));

        Ok(Self::with_services(config, model, forms))
    }

    pub fn with_services(
        config: Config,
        model: Arc<dyn TextModel>,
        forms: Arc<dyn FormService>,
    ) -> Self {
        let generator = QuizGenerator::new(
            model,
            config.model_name.clone(),
            config.model_api_key.clone(),
            config.max_source_chars,
        );
        let quiz_pipeline = Arc::new(QuizPipeline::new(
            generator,
            forms,
            config.quiz_title.clone(),
        ));

        Self {
            quiz_pipeline,
            config: Arc::new(config),
        }
    }
}
