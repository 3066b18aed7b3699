//! Repository Module
//!
//! Persistence access for the embedded SurrealDB instance. Reference fields
//! are stored as `table:key` strings and parsed back through [`parse_ref`];
//! a malformed identifier is always a validation error, never a generic
//! database failure.

pub mod dining_table;
pub mod employee;
pub mod menu_item;
pub mod order;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use employee::EmployeeRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        use crate::utils::AppError;
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Integrity(msg) => AppError::Integrity(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a client-supplied reference into a record id scoped to `table`
///
/// Accepts both the full `table:key` form and a bare key. A reference that
/// names a different table is rejected the same way as one that does not
/// parse at all.
pub fn parse_ref(table: &str, raw: &str) -> RepoResult<RecordId> {
    if raw.is_empty() {
        return Err(RepoError::Validation(format!(
            "Missing {} reference",
            table
        )));
    }
    if raw.contains(':') {
        let rid: RecordId = raw
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid {} id '{}'", table, raw)))?;
        if rid.table() != table {
            return Err(RepoError::Validation(format!(
                "Invalid {} id '{}'",
                table, raw
            )));
        }
        Ok(rid)
    } else {
        Ok(RecordId::from_table_key(table, raw))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Existence check that never deserializes the document body
    pub async fn exists(&self, id: &RecordId) -> RepoResult<bool> {
        let ids: Vec<RecordId> = self
            .db
            .query("SELECT VALUE id FROM $thing")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!ids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ref_accepts_bare_key_and_full_form() {
        let bare = parse_ref("order", "abc123").expect("bare key should parse");
        assert_eq!(bare.table(), "order");

        let full = parse_ref("order", "order:abc123").expect("full form should parse");
        assert_eq!(full, bare);
    }

    #[test]
    fn test_parse_ref_rejects_wrong_table_and_garbage() {
        assert!(matches!(
            parse_ref("order", "menu_item:abc"),
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(
            parse_ref("order", "order:"),
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(
            parse_ref("order", ""),
            Err(RepoError::Validation(_))
        ));
    }
}
