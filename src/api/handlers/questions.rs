use axum::{
    Json,
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
};
use std::sync::Arc;

use crate::api::{
    dto::{
        CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
        QuestionListResponse, SearchQuestionsRequest, SearchQuestionsResponse, categories_map,
    },
    error::ApiError,
    pagination::{PageQuery, paginate},
};
use crate::db::DbError;
use crate::services::QuestionService;

pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = service.all_questions().await?;
    let total_questions = questions.len();

    let current = paginate(&questions, page.page());
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = service.categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.into_iter().map(Into::into).collect(),
        total_questions,
        categories: categories_map(categories),
        current_category: None,
    }))
}

pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    Query(page): Query<PageQuery>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("A JSON body is required".to_string()))?;

    let question = service.create_question(payload.into()).await?;

    let questions = service.all_questions().await?;
    let total_questions = questions.len();
    let current = paginate(&questions, page.page());

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: question.id,
        questions: current.into_iter().map(Into::into).collect(),
        total_questions,
        current_category: question.category,
    }))
}

pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    Path(question_id): Path<i32>,
    Query(page): Query<PageQuery>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    service
        .delete_question(question_id)
        .await
        .map_err(|err| match err {
            DbError::NotFound => ApiError::NotFound,
            _ => ApiError::Unprocessable("Unable to delete the question".to_string()),
        })?;

    let questions = service.all_questions().await.map_err(|_| {
        ApiError::Unprocessable("Unable to reload questions after delete".to_string())
    })?;
    let total_questions = questions.len();
    let current = paginate(&questions, page.page());

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions: current.into_iter().map(Into::into).collect(),
        total_questions,
    }))
}

pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    Query(page): Query<PageQuery>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<SearchQuestionsResponse>, ApiError> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("A JSON body is required".to_string()))?;

    let term = payload.search_term.unwrap_or_default();
    if term.is_empty() {
        return Err(ApiError::BadRequest("A searchTerm is required".to_string()));
    }

    let matches = service.search_questions(&term).await?;
    let total_questions = matches.len();
    let current = paginate(&matches, page.page());

    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions: current.into_iter().map(Into::into).collect(),
        total_questions,
        current_category: None,
    }))
}
