//! HTTP client for network-based API calls
//!
//! The data gateway: one async function per API operation, each sending
//! the corresponding request and returning the parsed body. No retry,
//! no caching; failures propagate to the caller.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::MessageResponse;

/// HTTP client for making network requests to the directory server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response.
    ///
    /// A success status with a body that does not decode as `T` is a
    /// [`ClientError::Serialization`], not a transport error.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<MessageResponse>(&text)
                .map(|m| m.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        Ok(serde_json::from_str(&text)?)
    }

    // ========== Employee API ==========

    /// Fetch all employees, newest first
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/api/employees").await
    }

    /// Fetch a single employee by id
    pub async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
        self.get(&format!("/api/employees/{}", id)).await
    }

    /// Create a new employee
    pub async fn create_employee(&self, employee: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/api/employees", employee).await
    }

    /// Update an existing employee
    pub async fn update_employee(
        &self,
        id: &str,
        employee: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        self.put(&format!("/api/employees/{}", id), employee).await
    }

    /// Delete an employee by id
    pub async fn delete_employee(&self, id: &str) -> ClientResult<MessageResponse> {
        self.delete(&format!("/api/employees/{}", id)).await
    }
}
