use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{PublishPayload, TopScorer},
};

/// The remote form host: materializes a quiz as a form and reports the best
/// respondent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormService: Send + Sync {
    /// Creates the form and returns its URL.
    async fn publish(&self, payload: &PublishPayload) -> AppResult<String>;

    async fn top_scorer(&self, quiz_id: Option<String>) -> AppResult<TopScorer>;
}

/// Interprets the publish response: HTTP 200 with a string `url`.
pub fn parse_publish_response(status: StatusCode, body: &str) -> AppResult<String> {
    if status != StatusCode::OK {
        return Err(AppError::Publish(format!(
            "Form creation failed: {} - {}",
            status.as_u16(),
            body
        )));
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("url").and_then(Value::as_str).map(str::to_string))
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::Publish(format!("No form URL returned: {}", body)))
}

/// Interprets the top-scorer response. An `error` field is the service
/// saying "nothing yet", not a failure of ours.
pub fn parse_top_scorer_response(body: &str) -> AppResult<TopScorer> {
    let lookup_failed =
        |reason: &str| AppError::TopScorerLookup(format!("Failed to parse top scorer data: {reason}"));

    let json: Value = serde_json::from_str(body).map_err(|e| lookup_failed(&e.to_string()))?;
    let object = json
        .as_object()
        .ok_or_else(|| lookup_failed("response is not a JSON object"))?;

    if let Some(error) = object.get("error") {
        let message = match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return Ok(TopScorer::Pending { message });
    }

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| lookup_failed("missing 'name'"))?;
    let score = object
        .get("score")
        .and_then(|score| match score {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .ok_or_else(|| lookup_failed("missing or non-numeric 'score'"))?;

    Ok(TopScorer::Leader {
        name: name.to_string(),
        score,
    })
}

/// Form service reached over plain HTTP at a single web-app endpoint.
pub struct HttpFormService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FormService for HttpFormService {
    async fn publish(&self, payload: &PublishPayload) -> AppResult<String> {
        log::info!(
            "Publishing quiz {} with {} questions",
            payload.quiz_id,
            payload.questions.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach form service: {}", e);
                AppError::Publish(format!("Failed to reach form service: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read form service response: {}", e);
            AppError::Publish(format!("Failed to read form service response: {}", e))
        })?;

        log::debug!("Form service publish response {}: {}", status, body);
        parse_publish_response(status, &body)
    }

    async fn top_scorer(&self, quiz_id: Option<String>) -> AppResult<TopScorer> {
        let mut query = vec![("mode", "top_scorer")];
        if let Some(id) = quiz_id.as_deref() {
            query.push(("quiz_id", id));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach form service: {}", e);
                AppError::TopScorerLookup(format!("Failed to fetch top scorer: {}", e))
            })?;

        let body = response.text().await.map_err(|e| {
            AppError::TopScorerLookup(format!("Failed to fetch top scorer: {}", e))
        })?;

        parse_top_scorer_response(&body)
    }
}
