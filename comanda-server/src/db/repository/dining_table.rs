//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::DiningTable;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find table by record id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<DiningTable>> {
        let table: Option<DiningTable> = self.base.db().select(id.clone()).await?;
        Ok(table)
    }

    /// Check that a table record exists
    pub async fn exists(&self, id: &RecordId) -> RepoResult<bool> {
        self.base.exists(id).await
    }

    /// Create a new dining table (seed and test data)
    pub async fn create(&self, table: DiningTable) -> RepoResult<DiningTable> {
        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }
}
