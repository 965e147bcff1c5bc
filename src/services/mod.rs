pub mod document_service;
pub mod form_service;
pub mod json_extractor;
pub mod model_service;
pub mod quiz_generator;
pub mod quiz_pipeline;
