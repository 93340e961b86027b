//! Directory View
//!
//! State for the listing page: the fetched record list and the current
//! search text. Filtering is synchronous and local; every mutation is
//! followed by a full re-fetch rather than an optimistic edit.

use crate::http::HttpClient;
use shared::models::Employee;

/// Outcome of a load or reload.
///
/// Failures are explicit so callers (and tests) can observe them, but
/// the view still degrades to an empty list either way.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// List fetched; carries the number of records
    Loaded(usize),
    /// Fetch failed; carries the reason
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Directory listing state: records, search text, last failure
#[derive(Debug, Default, Clone)]
pub struct DirectoryView {
    records: Vec<Employee>,
    search: String,
    last_failure: Option<String>,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full list from the server.
    ///
    /// On failure the view renders as an empty list and the reason is
    /// kept for display; a diagnostic is also logged.
    pub async fn load(&mut self, gateway: &HttpClient) -> LoadOutcome {
        match gateway.list_employees().await {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.last_failure = None;
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch employees");
                self.records.clear();
                let reason = e.to_string();
                self.last_failure = Some(reason.clone());
                LoadOutcome::Failed(reason)
            }
        }
    }

    /// Delete one employee, then re-fetch the full list
    pub async fn remove(&mut self, gateway: &HttpClient, id: &str) -> LoadOutcome {
        if let Err(e) = gateway.delete_employee(id).await {
            tracing::warn!(error = %e, id = %id, "Failed to delete employee");
            let reason = e.to_string();
            self.last_failure = Some(reason.clone());
            return LoadOutcome::Failed(reason);
        }
        self.load(gateway).await
    }

    /// Update the search text; filtering happens in [`visible`](Self::visible)
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// All fetched records, unfiltered
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// Records matching the search text.
    ///
    /// Case-insensitive substring match against name OR department;
    /// an empty search shows everything.
    pub fn visible(&self) -> Vec<&Employee> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|emp| {
                emp.name.to_lowercase().contains(&needle)
                    || emp.department.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Reason for the most recent failed fetch, if any
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }
}
