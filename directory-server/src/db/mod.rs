//! Database Module
//!
//! Opens the embedded SurrealDB instance and defines the employee schema.
//! The store itself enforces the required-field rules: all three business
//! fields must be non-empty strings after trimming, and both timestamps
//! must be datetime-formatted strings.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "directory";
const DATABASE: &str = "directory";

/// Database service — owns the embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self { db };
        service.init().await?;

        tracing::info!(path = %db_path, "Database connection established");
        Ok(service)
    }

    /// Open an in-memory database (tests)
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        let service = Self { db };
        service.init().await?;
        Ok(service)
    }

    async fn init(&self) -> Result<(), AppError> {
        self.db
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        self.define_schema().await?;
        Ok(())
    }

    /// Define the employee table schema.
    ///
    /// OVERWRITE keeps this idempotent across restarts.
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE TABLE OVERWRITE employee SCHEMAFULL;
                DEFINE FIELD OVERWRITE name ON employee TYPE string
                    ASSERT string::len(string::trim($value)) > 0;
                DEFINE FIELD OVERWRITE role ON employee TYPE string
                    ASSERT string::len(string::trim($value)) > 0;
                DEFINE FIELD OVERWRITE department ON employee TYPE string
                    ASSERT string::len(string::trim($value)) > 0;
                DEFINE FIELD OVERWRITE createdAt ON employee TYPE string
                    ASSERT string::is::datetime($value);
                DEFINE FIELD OVERWRITE updatedAt ON employee TYPE string
                    ASSERT string::is::datetime($value);
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::debug!("Employee schema defined");
        Ok(())
    }
}
