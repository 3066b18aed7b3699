//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Employee;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find employee by record id
    ///
    /// Soft-deleted employees are still returned: existing orders keep
    /// referencing them and enrichment must continue to resolve them.
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self.base.db().select(id.clone()).await?;
        Ok(employee)
    }

    /// Check that an employee record exists
    pub async fn exists(&self, id: &RecordId) -> RepoResult<bool> {
        self.base.exists(id).await
    }

    /// Create a new employee (seed and test data)
    pub async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        let created: Option<Employee> = self.base.db().create(TABLE).content(employee).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }
}
