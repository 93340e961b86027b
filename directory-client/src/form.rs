//! Record Form
//!
//! The shared create/edit form model. The mode is determined solely by
//! the presence of an initial record: `None` means create, `Some` means
//! edit with pre-populated fields. Submission packages the current
//! values into a flat payload; persistence belongs to the caller.

use thiserror::Error;

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// Form mode, derived from the initial record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Form validation error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Field state of the employee form
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub name: String,
    pub role: String,
    pub department: String,
    mode: FormMode,
}

impl EmployeeForm {
    /// Build the initial field values from an optional existing record.
    ///
    /// Pure function of the input: re-evaluate it whenever the caller
    /// supplies a different record.
    pub fn new(initial: Option<&Employee>) -> Self {
        match initial {
            Some(emp) => Self {
                name: emp.name.clone(),
                role: emp.role.clone(),
                department: emp.department.clone(),
                mode: FormMode::Edit,
            },
            None => Self {
                name: String::new(),
                role: String::new(),
                department: String::new(),
                mode: FormMode::Create,
            },
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    fn require(value: &str, field: &'static str) -> Result<String, FormError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FormError::MissingField(field));
        }
        Ok(trimmed.to_string())
    }

    /// Package the current field values for submission.
    ///
    /// All three fields are required here, blocking empty submissions
    /// client-side; the store remains the authority.
    pub fn submit(&self) -> Result<EmployeeCreate, FormError> {
        Ok(EmployeeCreate {
            name: Self::require(&self.name, "name")?,
            role: Self::require(&self.role, "role")?,
            department: Self::require(&self.department, "department")?,
        })
    }

    /// The same values as a full update payload, used by the edit page
    pub fn as_update(&self) -> Result<EmployeeUpdate, FormError> {
        let data = self.submit()?;
        Ok(EmployeeUpdate {
            name: Some(data.name),
            role: Some(data.role),
            department: Some(data.department),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn existing() -> Employee {
        let now = Utc::now();
        Employee {
            id: "abc123".to_string(),
            name: "Ann".to_string(),
            role: "Dev".to_string(),
            department: "Eng".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_mode_starts_empty() {
        let form = EmployeeForm::new(None);
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.name.is_empty());
        assert!(form.role.is_empty());
        assert!(form.department.is_empty());
    }

    #[test]
    fn edit_mode_prepopulates_from_record() {
        let emp = existing();
        let form = EmployeeForm::new(Some(&emp));
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.name, "Ann");
        assert_eq!(form.role, "Dev");
        assert_eq!(form.department, "Eng");
    }

    #[test]
    fn submit_blocks_empty_fields() {
        let mut form = EmployeeForm::new(None);
        form.name = "Ann".to_string();
        form.role = "   ".to_string();
        form.department = "Eng".to_string();

        assert_eq!(form.submit(), Err(FormError::MissingField("role")));
    }

    #[test]
    fn submit_trims_values() {
        let mut form = EmployeeForm::new(None);
        form.name = "  Ann ".to_string();
        form.role = "Dev".to_string();
        form.department = "Eng".to_string();

        let data = form.submit().unwrap();
        assert_eq!(data.name, "Ann");
    }

    #[test]
    fn as_update_supplies_all_fields() {
        let emp = existing();
        let mut form = EmployeeForm::new(Some(&emp));
        form.role = "Lead".to_string();

        let update = form.as_update().unwrap();
        assert_eq!(update.role.as_deref(), Some("Lead"));
        assert_eq!(update.name.as_deref(), Some("Ann"));
    }
}
