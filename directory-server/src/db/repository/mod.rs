//! Repository Module
//!
//! CRUD operations over the embedded document store.

pub mod employee;

pub use employee::EmployeeRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: ids travel as "table:key" strings
// =============================================================================
//
// API callers may also pass the bare key; `parse_record_id` accepts both
// forms and pins the table name.

/// Parse an id string into a RecordId for the given table
pub(crate) fn parse_record_id(table: &str, id: &str) -> RecordId {
    match id.split_once(':') {
        Some((tb, key)) => RecordId::from_table_key(tb, key),
        None => RecordId::from_table_key(table, id),
    }
}

/// Trim a required text field, rejecting empty-after-trim values
pub(crate) fn required_text(value: &str, field: &str) -> RepoResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
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
}
