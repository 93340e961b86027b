//! Shared types for the Employee Directory
//!
//! Wire-level types used by both the server and the client:
//! record models, create/update payloads, and response structures.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use response::MessageResponse;
pub use serde::{Deserialize, Serialize};
