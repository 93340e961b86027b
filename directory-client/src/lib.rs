//! Directory Client - HTTP client for the Employee Directory API
//!
//! Provides the data gateway (five REST calls behind plain async
//! functions) plus the two UI-side state components: the directory
//! view (list / search / delete) and the record form (create / edit).

pub mod config;
pub mod directory;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use directory::{DirectoryView, LoadOutcome};
pub use error::{ClientError, ClientResult};
pub use form::{EmployeeForm, FormError, FormMode};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use shared::response::MessageResponse;
