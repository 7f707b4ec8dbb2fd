use async_trait::async_trait;

use crate::db::DbError;
use crate::domain::{Category, NewQuestion, Question};

pub mod category_repo;
pub mod memory;
pub mod question_repo;

pub use category_repo::CategoryRepository;
pub use memory::MemoryStore;
pub use question_repo::QuestionRepository;

/// Storage capability for questions. Listings come back ordered by id;
/// a missing record is `DbError::NotFound`. `delete` on an absent id is a
/// no-op, callers resolve existence first.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Question>, DbError>;
    async fn get(&self, id: i32) -> Result<Question, DbError>;
    async fn by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError>;
    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError>;
    async fn insert(&self, question: NewQuestion) -> Result<Question, DbError>;
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}

/// Storage capability for categories. Read-only: categories are seeded by
/// migration and never written through the API.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Category>, DbError>;
    async fn get(&self, id: i32) -> Result<Category, DbError>;
}
