use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::db::DbError;
use crate::domain::{Category, NewQuestion, Question};

use super::{CategoryStore, QuestionStore};

/// In-memory store implementing both storage capabilities. Backs the route
/// tests and the `STORE_BACKEND=memory` mode. Ids are never reused within a
/// process, mirroring the database-assigned id contract.
pub struct MemoryStore {
    questions: DashMap<i32, Question>,
    categories: DashMap<i32, Category>,
    next_question_id: AtomicI32,
    next_category_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            questions: DashMap::new(),
            categories: DashMap::new(),
            next_question_id: AtomicI32::new(1),
            next_category_id: AtomicI32::new(1),
        }
    }

    /// Register a category. The API never writes categories, so seeding
    /// happens through this side door.
    pub fn add_category(&self, kind: impl Into<String>) -> Category {
        let id = self.next_category_id.fetch_add(1, Ordering::SeqCst);
        let category = Category::new(id, kind);
        self.categories.insert(id, category.clone());
        category
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn all(&self) -> Result<Vec<Question>, DbError> {
        let mut questions: Vec<Question> =
            self.questions.iter().map(|entry| entry.value().clone()).collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn get(&self, id: i32) -> Result<Question, DbError> {
        self.questions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(DbError::NotFound)
    }

    async fn by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|entry| entry.value().category == category_id)
            .map(|entry| entry.value().clone())
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|entry| entry.value().matches(term))
            .map(|entry| entry.value().clone())
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, DbError> {
        let id = self.next_question_id.fetch_add(1, Ordering::SeqCst);
        let question = question.into_question(id);
        self.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.questions.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn all(&self) -> Result<Vec<Category>, DbError> {
        let mut categories: Vec<Category> =
            self.categories.iter().map(|entry| entry.value().clone()).collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get(&self, id: i32) -> Result<Category, DbError> {
        self.categories
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(DbError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "42".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.insert(new_question("one", 1)).await.unwrap();
        let second = store.insert(new_question("two", 1)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();

        let first = store.insert(new_question("one", 1)).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.insert(new_question("two", 1)).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();

        assert!(matches!(
            QuestionStore::get(&store, 7).await,
            Err(DbError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_listings_are_ordered_by_id() {
        let store = MemoryStore::new();

        for n in 0..5 {
            store.insert(new_question(&format!("q{}", n), 1)).await.unwrap();
        }

        let ids: Vec<i32> = QuestionStore::all(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
