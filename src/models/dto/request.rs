use serde::Deserialize;
use validator::Validate;

use crate::constants::quiz_prompt::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

/// Query string of `POST /api/quizzes`. The document itself is the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizQuery {
    #[serde(default = "default_question_count")]
    #[validate(range(min = MIN_QUESTION_COUNT, max = MAX_QUESTION_COUNT))]
    pub count: u32,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub quiz_id: Option<String>,
}
