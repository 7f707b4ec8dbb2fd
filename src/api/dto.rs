use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Category, NewQuestion, Question};

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        // Absent fields are accepted as-is; the legacy API performed no
        // field validation and the front-end relies on that.
        NewQuestion {
            question: request.question.unwrap_or_default(),
            answer: request.answer.unwrap_or_default(),
            category: request.category.unwrap_or_default(),
            difficulty: request.difficulty.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// The category selector sent by the play tab; id 0 means any category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

// Response DTOs
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        QuestionResponse {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            kind: category.kind,
        }
    }
}

/// Project categories into the id-keyed map the front-end indexes into.
pub fn categories_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// Listing endpoints keep the legacy camelCase fields; mutating and search
// endpoints keep snake_case. The casing split is part of the wire contract.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<CategoryResponse>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: CategoryResponse,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: i32,
}

#[derive(Debug, Serialize)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: Option<CategoryResponse>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionResponse>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
