use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    constants::quiz_prompt::{DEFAULT_QUIZ_TITLE, MAX_SOURCE_CHARS},
    errors::{AppError, AppResult},
};

pub const DEFAULT_MODEL_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub model_api_key: SecretString,
    pub model_api_base: String,
    pub model_name: String,
    pub form_service_url: String,
    pub quiz_title: String,
    pub max_source_chars: usize,
    pub max_upload_bytes: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

fn required(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("{name} must be set")))
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Reads settings from the environment. Secrets and the form endpoint
    /// have no defaults.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            model_api_key: SecretString::from(required("MODEL_API_KEY")?),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            form_service_url: required("FORM_SERVICE_URL")?,
            quiz_title: env::var("QUIZ_TITLE").unwrap_or_else(|_| DEFAULT_QUIZ_TITLE.to_string()),
            max_source_chars: parsed_or("MAX_SOURCE_CHARS", MAX_SOURCE_CHARS),
            max_upload_bytes: parsed_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parsed_or("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }

    /// Rejects settings that would only fail later, on the first request.
    pub fn validate(&self) -> AppResult<()> {
        if self.model_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Config("MODEL_API_KEY is empty".to_string()));
        }

        if !(self.form_service_url.starts_with("https://")
            || self.form_service_url.starts_with("http://"))
        {
            return Err(AppError::Config(format!(
                "FORM_SERVICE_URL must be an http(s) URL, got '{}'",
                self.form_service_url
            )));
        }

        if self.max_source_chars == 0 {
            return Err(AppError::Config(
                "MAX_SOURCE_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            model_api_key: SecretString::from("test-model-key".to_string()),
            model_api_base: "http://127.0.0.1:9/v1".to_string(),
            model_name: "test-model".to_string(),
            form_service_url: "http://127.0.0.1:9/exec".to_string(),
            quiz_title: DEFAULT_QUIZ_TITLE.to_string(),
            max_source_chars: MAX_SOURCE_CHARS,
            max_upload_bytes: 1024 * 1024,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}
