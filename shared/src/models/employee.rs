//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An employee record as it travels over the wire.
///
/// The id is the store-assigned record key.
/// Timestamps are RFC 3339 strings in JSON (`createdAt` / `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload.
///
/// Fields default to empty strings when absent so that a sparse body
/// reaches the store's validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
}

/// Update employee payload (all fields optional, sparse merge)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl EmployeeUpdate {
    /// True when no field is supplied at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.role.is_none() && self.department.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_json_uses_camel_case_timestamps() {
        let json = r#"{
            "id": "employee:abc123",
            "name": "Ann",
            "role": "Dev",
            "department": "Eng",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#;

        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.name, "Ann");
        assert_eq!(emp.created_at, emp.updated_at);

        let out = serde_json::to_value(&emp).unwrap();
        assert!(out.get("createdAt").is_some());
        assert!(out.get("updatedAt").is_some());
        assert!(out.get("created_at").is_none());
    }

    #[test]
    fn update_payload_skips_unset_fields() {
        let update = EmployeeUpdate {
            role: Some("Lead".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"role":"Lead"}"#);
        assert!(!update.is_empty());
        assert!(EmployeeUpdate::default().is_empty());
    }
}
