use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::json_extractor::ExtractionError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Quiz generation failed: {0}")]
    Generation(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    Publish(String),

    #[error("{0}")]
    TopScorerLookup(String),

    #[error("Could not read document: {0}")]
    Document(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Publish(_) => "PUBLISH_ERROR",
            AppError::TopScorerLookup(_) => "TOP_SCORER_LOOKUP_ERROR",
            AppError::Document(_) => "DOCUMENT_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Generation(_)
            | AppError::Extraction(_)
            | AppError::Publish(_)
            | AppError::TopScorerLookup(_) => StatusCode::BAD_GATEWAY,
            AppError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            kind: self.error_code(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Extraction(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Generation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
