use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::services::{QuestionService, QuizService};

use super::error::ApiError;
use super::handlers;

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Questions
        .route(
            "/questions",
            get(handlers::list_questions)
                .post(handlers::create_question)
                .with_state(state.question_service.clone()),
        )
        .route(
            "/questions/{id}",
            delete(handlers::delete_question).with_state(state.question_service.clone()),
        )
        .route(
            "/questions/search",
            post(handlers::search_questions).with_state(state.question_service.clone()),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories).with_state(state.question_service.clone()),
        )
        .route(
            "/categories/{id}/questions",
            get(handlers::category_questions).with_state(state.question_service.clone()),
        )
        // Quiz play
        .route(
            "/quizzes",
            post(handlers::next_quiz_question).with_state(state.quiz_service.clone()),
        )
        // Unknown routes get the same error body as everything else
        .fallback(not_found)
}

async fn health_check() -> axum::Json<crate::api::dto::HealthResponse> {
    axum::Json(crate::api::dto::HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
