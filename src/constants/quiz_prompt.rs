pub const MAX_SOURCE_CHARS: usize = 2000;
pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 50;
pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const DEFAULT_QUIZ_TITLE: &str = "Auto-Generated Quiz";

const QUIZ_GENERATOR_PROMPT: &str = r#"You are a quiz-making assistant.

From the content below, generate exactly {count} multiple-choice questions.
Each question must have:
- A "question" string
- An "options" list of 4 strings
- An "answer" string that exactly matches one of the options

Only output a valid JSON array in this format:
[
  {
    "question": "Sample?",
    "options": ["A", "B", "C", "D"],
    "answer": "B"
  },
  ...
]

Content:
{content}
"#;

/// Returns at most `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn build_quiz_prompt(content: &str, question_count: u32) -> String {
    QUIZ_GENERATOR_PROMPT
        .replace("{count}", &question_count.to_string())
        .replace("{content}", content)
}
