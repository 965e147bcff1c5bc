use actix_web::{get, http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::CreateQuizQuery, response::TopScorerResponse},
    services::{document_service::UploadedDocument, quiz_pipeline::QuizOptions},
};

/// Uploads a PDF or slide deck as the raw request body and publishes a quiz
/// generated from it.
#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CreateQuizQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    log::info!(
        "Quiz requested (request {}): {} questions from {} bytes of {}",
        get_request_id(&req).unwrap_or_default(),
        query.count,
        body.len(),
        content_type
    );

    let document = UploadedDocument::new(content_type, body.to_vec());
    let options = QuizOptions {
        question_count: query.count,
        title: query.title,
        quiz_id: query.quiz_id,
    };

    let published = state.quiz_pipeline.run(document, options).await.map_err(|e| {
        log::error!(
            "Quiz pipeline failed (request {}): {}",
            get_request_id(&req).unwrap_or_default(),
            e
        );
        e
    })?;

    Ok(HttpResponse::Created().json(published))
}

#[get("/api/quizzes/{quiz_id}/top-scorer")]
pub async fn get_quiz_top_scorer(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let top = state
        .quiz_pipeline
        .top_scorer(Some(quiz_id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(TopScorerResponse::from(top)))
}

/// Top scorer of the form service's most recent quiz, for clients that
/// never kept an identifier.
#[get("/api/top-scorer")]
pub async fn get_latest_top_scorer(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let top = state.quiz_pipeline.top_scorer(None).await?;
    Ok(HttpResponse::Ok().json(TopScorerResponse::from(top)))
}
