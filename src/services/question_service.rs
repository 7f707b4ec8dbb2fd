use std::sync::Arc;

use crate::db::DbError;
use crate::domain::{Category, NewQuestion, Question};
use crate::repositories::{CategoryStore, QuestionStore};

pub struct QuestionService {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// All questions, ordered by id
    pub async fn all_questions(&self) -> Result<Vec<Question>, DbError> {
        self.questions.all().await
    }

    /// All categories, ordered by id
    pub async fn categories(&self) -> Result<Vec<Category>, DbError> {
        self.categories.all().await
    }

    pub async fn category(&self, id: i32) -> Result<Category, DbError> {
        self.categories.get(id).await
    }

    pub async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        self.questions.by_category(category_id).await
    }

    /// Questions whose text contains the term, case-insensitively
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        self.questions.search(term).await
    }

    /// Insert a new question; the store assigns the id
    pub async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        self.questions.insert(question).await
    }

    /// Delete a question by id. Fails with `DbError::NotFound` if no such
    /// question exists.
    pub async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        // Resolve first; the store-level delete is a blind no-op on absence.
        self.questions.get(id).await?;
        self.questions.delete(id).await
    }
}
