use async_trait::async_trait;
use scylla::IntoTypedRows;
use scylla::query::Query;

use crate::db::{CategoryRow, DbClient, DbError};
use crate::domain::Category;

use super::CategoryStore;

#[derive(Clone)]
pub struct CategoryRepository {
    client: DbClient,
}

impl CategoryRepository {
    pub fn new(client: DbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn all(&self) -> Result<Vec<Category>, DbError> {
        let query = Query::new(crate::db::queries::SELECT_ALL_CATEGORIES);

        let result = self.client.session().query(query, &[]).await?;

        let rows = result.rows.unwrap_or_default();
        let mut categories = Vec::new();

        for row in rows.into_typed::<CategoryRow>() {
            let row =
                row.map_err(|e| DbError::InvalidData(format!("Failed to parse row: {}", e)))?;
            categories.push(row.to_category());
        }

        categories.sort_by_key(|c| c.id);

        Ok(categories)
    }

    async fn get(&self, id: i32) -> Result<Category, DbError> {
        let query = Query::new(crate::db::queries::SELECT_CATEGORY);

        let result = self.client.session().query(query, (id,)).await?;

        let row = result
            .rows
            .ok_or(DbError::NotFound)?
            .into_typed::<CategoryRow>()
            .next()
            .ok_or(DbError::NotFound)?
            .map_err(|e| DbError::InvalidData(format!("Failed to parse category row: {}", e)))?;

        Ok(row.to_category())
    }
}
