use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::api::{
    dto::{CategoriesResponse, CategoryQuestionsResponse, categories_map},
    error::ApiError,
    pagination::{PageQuery, paginate},
};
use crate::services::QuestionService;

pub async fn list_categories(
    State(service): State<Arc<QuestionService>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = service.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_map(categories),
    }))
}

pub async fn category_questions(
    State(service): State<Arc<QuestionService>>,
    Path(category_id): Path<i32>,
    Query(page): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // Anything that goes wrong while resolving the category or its
    // questions reads as "not found" to the client.
    let category = service
        .category(category_id)
        .await
        .map_err(|_| ApiError::NotFound)?;

    let questions = service
        .questions_in_category(category_id)
        .await
        .map_err(|_| ApiError::NotFound)?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = questions.len();
    let current = paginate(&questions, page.page());

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: current.into_iter().map(Into::into).collect(),
        total_questions,
        current_category: category.into(),
    }))
}
