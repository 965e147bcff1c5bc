use serde::Serialize;

use crate::models::domain::TopScorer;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Rendered top-scorer outcome. A pending lookup is a warning, not an error.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TopScorerResponse {
    Success {
        name: String,
        score: f64,
        message: String,
    },
    Warning {
        message: String,
    },
}

impl From<TopScorer> for TopScorerResponse {
    fn from(top: TopScorer) -> Self {
        match top {
            TopScorer::Leader { name, score } => TopScorerResponse::Success {
                message: format!("Top Scorer: {name} - {score} points"),
                name,
                score,
            },
            TopScorer::Pending { message } => TopScorerResponse::Warning { message },
        }
    }
}
