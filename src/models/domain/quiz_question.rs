use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// One multiple-choice item as produced by the model. Values are kept
/// verbatim; nothing is trimmed or case-folded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Questions exactly as recovered from model output. Items are forwarded
/// to the form service verbatim, extra fields included; use
/// [`QuizQuestion::from_value`] for a typed view.
pub type QuizSet = Vec<Value>;

impl QuizQuestion {
    /// Typed view of one recovered item, `None` when a field is missing or
    /// has the wrong type.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Non-empty question, four distinct options, and an answer equal to
    /// exactly one of them.
    pub fn is_well_formed(&self) -> bool {
        let distinct: HashSet<&str> = self.options.iter().map(String::as_str).collect();

        !self.question.is_empty()
            && self.options.len() == OPTIONS_PER_QUESTION
            && distinct.len() == OPTIONS_PER_QUESTION
            && self.options.iter().filter(|o| **o == self.answer).count() == 1
    }
}
