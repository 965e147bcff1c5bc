//! Recovers a JSON array from free-form model output.
//!
//! Models tend to wrap the array in prose or code fences, so a single strict
//! parse is too brittle. Strategies run from exact to permissive and the
//! first one that yields a `Vec<T>` wins:
//!
//! 1. the whole input,
//! 2. each array-of-objects looking fragment, in order of appearance,
//! 3. the span from the first `[` to the last `]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{errors::AppResult, models::domain::QuizSet};

static ARRAY_FRAGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("ARRAY_FRAGMENT_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    PatternScan,
    BracketSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Could not extract a valid JSON array from model output")]
    NoArray,
}

fn parse<T: DeserializeOwned>(candidate: &str) -> Option<Vec<T>> {
    serde_json::from_str(candidate).ok()
}

fn pattern_scan<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    ARRAY_FRAGMENT_REGEX
        .find_iter(text)
        .find_map(|candidate| parse(candidate.as_str()))
}

fn bracket_span<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    parse(&text[start..=end])
}

/// Like [`extract_array`] but also reports which strategy succeeded.
pub fn extract_array_with_strategy<T: DeserializeOwned>(
    text: &str,
) -> Result<(Vec<T>, Strategy), ExtractionError> {
    if let Some(items) = parse(text) {
        return Ok((items, Strategy::Direct));
    }
    if let Some(items) = pattern_scan(text) {
        return Ok((items, Strategy::PatternScan));
    }
    if let Some(items) = bracket_span(text) {
        return Ok((items, Strategy::BracketSpan));
    }
    Err(ExtractionError::NoArray)
}

/// Recovers the first JSON array in `text` whose elements deserialize as `T`.
///
/// With `T = serde_json::Value` no shape is checked at all.
pub fn extract_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ExtractionError> {
    extract_array_with_strategy(text).map(|(items, _)| items)
}

/// Recovers the quiz questions from raw model output.
///
/// Only JSON validity decides which candidate wins. Items are returned as
/// parsed, so a question missing a field still comes back here; checking
/// shape is up to the caller.
pub fn extract_questions(text: &str) -> AppResult<QuizSet> {
    let (questions, strategy) = extract_array_with_strategy::<Value>(text)?;
    log::debug!(
        "Recovered {} questions from model output using {:?}",
        questions.len(),
        strategy
    );
    Ok(questions)
}
