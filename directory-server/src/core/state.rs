use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// Server state — shared handle to configuration and the database.
///
/// Cloned into every request handler; the database connection is an
/// internally shared handle, so clones are cheap.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Initialize server state: create the work dir and open the database
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db_service = DbService::new(&config.db_path()).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }

    /// Initialize with an in-memory database.
    ///
    /// Used by tests; nothing touches the filesystem.
    pub async fn initialize_in_memory(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::new_in_memory().await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }
}
