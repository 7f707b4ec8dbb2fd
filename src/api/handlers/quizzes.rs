use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

use crate::api::{
    dto::{QuizRequest, QuizResponse},
    error::ApiError,
};
use crate::services::QuizService;
use crate::services::quiz_service::ANY_CATEGORY;

pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("A JSON body is required".to_string()))?;

    let previous_questions = payload.previous_questions.unwrap_or_default();
    let category_id = payload
        .quiz_category
        .map(|category| category.id)
        .unwrap_or(ANY_CATEGORY);

    let question = service
        .next_question(&previous_questions, category_id)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(Into::into),
    }))
}
