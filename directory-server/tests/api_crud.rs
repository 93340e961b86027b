//! HTTP contract tests, driven through the router without a socket

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use directory_server::{Config, ServerState, api};

async fn app() -> Router {
    let config = Config::with_overrides("unused", 0);
    let state = ServerState::initialize_in_memory(&config).await.unwrap();
    api::build_app(&state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn end_to_end_crud_flow() {
    let app = app().await;

    // POST -> 201 with a generated id and equal timestamps
    let (status, created) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "Dev", "department": "Eng"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    // GET -> same fields
    let (status, fetched) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ann");
    assert_eq!(fetched["role"], "Dev");
    assert_eq!(fetched["department"], "Eng");

    // PUT partial -> role updated, other fields untouched
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(json!({"role": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "Lead");
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["department"], "Eng");

    // DELETE -> confirmation message
    let (status, deleted) = send(&app, "DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Employee deleted successfully");

    // GET -> 404 with a message body
    let (status, missing) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(missing["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = app().await;

    send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "Dev", "department": "Eng"})),
    )
    .await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Bob", "role": "Ops", "department": "Sales"})),
    )
    .await;

    let (status, list) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Bob");
    assert_eq!(list[1]["name"], "Ann");
}

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let app = app().await;

    let (status, list) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "Dev"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("department must not be empty")
    );
}

#[tokio::test]
async fn create_with_blank_field_is_rejected() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "   ", "department": "Eng"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_id_is_404() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/doesnotexist",
        Some(json!({"role": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_blank_field_is_rejected() {
    let app = app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "Dev", "department": "Eng"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(json!({"name": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() {
    let app = app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Ann", "role": "Dev", "department": "Eng"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, "PUT", &format!("/api/employees/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No fields supplied for update");

    // the record is untouched
    let (_, fetched) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(fetched["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn delete_is_idempotent_at_the_api_layer() {
    let app = app().await;

    let (status, body) = send(&app, "DELETE", "/api/employees/doesnotexist", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");
}

#[tokio::test]
async fn health_and_liveness_endpoints() {
    let app = app().await;

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "ok");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Employee Directory API is running...");
}
