pub mod quiz;
pub mod quiz_question;

pub use quiz::{GenerationRequest, PublishPayload, PublishedQuiz, TopScorer};
pub use quiz_question::{QuizQuestion, QuizSet};
