use async_trait::async_trait;
use scylla::IntoTypedRows;
use scylla::query::Query;

use crate::db::{DbClient, DbError, QuestionRow};
use crate::domain::{NewQuestion, Question};

use super::QuestionStore;

#[derive(Clone)]
pub struct QuestionRepository {
    client: DbClient,
}

impl QuestionRepository {
    pub fn new(client: DbClient) -> Self {
        Self { client }
    }

    /// Next free question id. CQL has no serial column, so ids are assigned
    /// as max + 1 under a single-writer assumption.
    async fn next_id(&self) -> Result<i32, DbError> {
        let query = Query::new(crate::db::queries::SELECT_MAX_QUESTION_ID);

        let result = self.client.session().query(query, &[]).await?;

        let max = result
            .rows
            .unwrap_or_default()
            .into_typed::<(Option<i32>,)>()
            .next()
            .transpose()
            .map_err(|e| DbError::InvalidData(format!("Failed to parse max id: {}", e)))?
            .and_then(|(max,)| max)
            .unwrap_or(0);

        Ok(max + 1)
    }
}

#[async_trait]
impl QuestionStore for QuestionRepository {
    async fn all(&self) -> Result<Vec<Question>, DbError> {
        let query = Query::new(crate::db::queries::SELECT_ALL_QUESTIONS);

        let result = self.client.session().query(query, &[]).await?;

        let rows = result.rows.unwrap_or_default();
        let mut questions = Vec::new();

        for row in rows.into_typed::<QuestionRow>() {
            let row =
                row.map_err(|e| DbError::InvalidData(format!("Failed to parse row: {}", e)))?;
            questions.push(row.to_question());
        }

        // Partitions come back unordered; listings are ordered by id.
        questions.sort_by_key(|q| q.id);

        Ok(questions)
    }

    async fn get(&self, id: i32) -> Result<Question, DbError> {
        let query = Query::new(crate::db::queries::SELECT_QUESTION);

        let result = self.client.session().query(query, (id,)).await?;

        let row = result
            .rows
            .ok_or(DbError::NotFound)?
            .into_typed::<QuestionRow>()
            .next()
            .ok_or(DbError::NotFound)?
            .map_err(|e| DbError::InvalidData(format!("Failed to parse question row: {}", e)))?;

        Ok(row.to_question())
    }

    async fn by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let query = Query::new(crate::db::queries::SELECT_QUESTIONS_BY_CATEGORY);

        let result = self.client.session().query(query, (category_id,)).await?;

        let rows = result.rows.unwrap_or_default();
        let mut questions = Vec::new();

        for row in rows.into_typed::<QuestionRow>() {
            let row =
                row.map_err(|e| DbError::InvalidData(format!("Failed to parse row: {}", e)))?;
            questions.push(row.to_question());
        }

        questions.sort_by_key(|q| q.id);

        Ok(questions)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        // No substring predicate in CQL; scan and filter in process.
        let questions = self.all().await?;
        Ok(questions.into_iter().filter(|q| q.matches(term)).collect())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, DbError> {
        let id = self.next_id().await?;
        let question = question.into_question(id);
        let row = QuestionRow::from_question(&question);

        let query = Query::new(crate::db::queries::INSERT_QUESTION);

        self.client
            .session()
            .query(
                query,
                (row.id, row.question, row.answer, row.category, row.difficulty),
            )
            .await?;

        Ok(question)
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let query = Query::new(crate::db::queries::DELETE_QUESTION);

        self.client.session().query(query, (id,)).await?;

        Ok(())
    }
}
