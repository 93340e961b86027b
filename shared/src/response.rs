//! Common response structures

use serde::{Deserialize, Serialize};

/// Plain confirmation body: `{"message": "..."}`
///
/// Used for delete confirmations and for error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
