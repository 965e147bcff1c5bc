use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::{
    constants::quiz_prompt::{build_quiz_prompt, truncate_chars},
    models::domain::quiz_question::QuizSet,
};

/// Inputs of one model call. Built right before the call and dropped after.
#[derive(Debug)]
pub struct GenerationRequest {
    pub source_text: String,
    pub question_count: u32,
    pub model: String,
    pub credential: SecretString,
}

impl GenerationRequest {
    pub fn new(
        source_text: &str,
        max_source_chars: usize,
        question_count: u32,
        model: impl Into<String>,
        credential: SecretString,
    ) -> Self {
        Self {
            source_text: truncate_chars(source_text, max_source_chars).to_string(),
            question_count,
            model: model.into(),
            credential,
        }
    }

    pub fn prompt(&self) -> String {
        build_quiz_prompt(&self.source_text, self.question_count)
    }
}

/// Body of the form-publish call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublishPayload {
    pub title: String,
    pub questions: QuizSet,
    pub quiz_id: String,
}

/// Outcome of a top-scorer query. `Pending` carries the service's own
/// `error` text, e.g. when nobody has answered yet.
#[derive(Clone, Debug, PartialEq)]
pub enum TopScorer {
    Leader { name: String, score: f64 },
    Pending { message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublishedQuiz {
    pub quiz_id: String,
    pub form_url: String,
    pub question_count: usize,
    pub model_output: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_request_truncates_source() {
        let source = "x".repeat(2500);
        let request = GenerationRequest::new(
            &source,
            2000,
            5,
            "test-model",
            SecretString::from("key".to_string()),
        );

        assert_eq!(request.source_text.chars().count(), 2000);
        assert!(request.prompt().contains("generate exactly 5 multiple-choice questions"));
    }

    #[test]
    fn publish_payload_serializes_to_form_contract() {
        let payload = PublishPayload {
            title: "Auto-Generated Quiz".to_string(),
            questions: vec![json!({
                "question": "Q1?",
                "options": ["A", "B", "C", "D"],
                "answer": "B",
                "explanation": "B is right"
            })],
            quiz_id: "quiz-1".to_string(),
        };

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["title"], "Auto-Generated Quiz");
        assert_eq!(json["quiz_id"], "quiz-1");
        assert_eq!(json["questions"][0]["answer"], "B");
        assert_eq!(json["questions"][0]["options"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["questions"][0]["explanation"], "B is right");
    }
}
