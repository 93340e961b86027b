//! Employee Directory Server
//!
//! REST API for the employee directory, backed by an embedded SurrealDB
//! document store.
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routes and handlers
//! ├── db/            # Database layer (store + repository)
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::repository::EmployeeRepository;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load environment variables, read configuration, and initialize logging.
///
/// Called once at process start. In production logs also go to daily
/// rolling files under the work dir; in development the default level
/// is debug. LOG_LEVEL overrides the level either way.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| if config.is_development() { "debug" } else { "info" }.to_string());

    if config.is_production() {
        std::fs::create_dir_all(config.log_dir())?;
        init_logger_with_file(Some(&level), Some(&config.log_dir()));
    } else {
        init_logger_with_file(Some(&level), None);
    }

    Ok(config)
}
