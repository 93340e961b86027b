//! Employee Repository
//!
//! The record store: a single flat collection of employee documents.
//! Ids are store-assigned UUID keys; timestamps are RFC 3339 strings with
//! fixed microsecond precision so that lexicographic order matches
//! chronological order.

use chrono::{SecondsFormat, Utc};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id, required_text};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

const TABLE: &str = "employee";

/// Projection shared by every read: the bare record key plus the
/// document fields, in the wire shape the API returns.
const FIELDS: &str = "record::id(id) AS id, name, role, department, createdAt, updatedAt";

fn now_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

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

    /// Find all employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM employee ORDER BY createdAt DESC"
            ))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id(TABLE, id);
        let mut result = self
            .base
            .db()
            .query(format!("SELECT {FIELDS} FROM employee WHERE id = $thing"))
            .bind(("thing", thing))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee.
    ///
    /// All three fields are trimmed and must be non-empty. The store
    /// assigns the id and sets createdAt == updatedAt.
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let name = required_text(&data.name, "name")?;
        let role = required_text(&data.role, "role")?;
        let department = required_text(&data.department, "department")?;

        let key = Uuid::new_v4().simple().to_string();
        let thing = RecordId::from_table_key(TABLE, key.clone());
        let now = now_string();

        self.base
            .db()
            .query(
                "CREATE $thing SET \
                    name = $name, \
                    role = $role, \
                    department = $department, \
                    createdAt = $now, \
                    updatedAt = $now",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("role", role))
            .bind(("department", department))
            .bind(("now", now))
            .await?
            .check()?;

        self.find_by_id(&key)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee with a sparse field set.
    ///
    /// Supplied fields are trimmed and validated against the same
    /// non-empty rule as create; omitted fields keep their prior values.
    /// Always refreshes updatedAt.
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let name = data
            .name
            .as_deref()
            .map(|v| required_text(v, "name"))
            .transpose()?;
        let role = data
            .role
            .as_deref()
            .map(|v| required_text(v, "role"))
            .transpose()?;
        let department = data
            .department
            .as_deref()
            .map(|v| required_text(v, "department"))
            .transpose()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                    name = IF $has_name THEN $name ELSE name END, \
                    role = IF $has_role THEN $role ELSE role END, \
                    department = IF $has_department THEN $department ELSE department END, \
                    updatedAt = $now",
            )
            .bind(("thing", thing))
            .bind(("has_name", name.is_some()))
            .bind(("name", name))
            .bind(("has_role", role.is_some()))
            .bind(("role", role))
            .bind(("has_department", department.is_some()))
            .bind(("department", department))
            .bind(("now", now_string()))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee.
    ///
    /// Returns false when the id was already absent; missing records are
    /// not an error here.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let thing = parse_record_id(TABLE, id);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }
}
