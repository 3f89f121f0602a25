//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use rsvp_backend::app::create_app;
use rsvp_backend::config::Config;
use rsvp_backend::database::Database;
use rsvp_backend::services::id_issuer::IdIssuer;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router backed by a fresh in-memory database.
pub async fn create_test_app() -> Router {
    let config = Config::in_memory();
    let db = Database::new(&config)
        .await
        .expect("Failed to open in-memory database");
    db.init_schema().await.expect("Failed to create schema");

    create_app(db.pool().clone(), IdIssuer::from_config(&config))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

pub async fn response_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Creates the Alice & Bob garden invitation and returns its id.
pub async fn create_garden_invitation(app: &Router) -> String {
    let request = json_request(
        Method::POST,
        "/",
        json!({
            "coupleName1": "Alice",
            "coupleName2": "Bob",
            "date": "2025-06-01",
            "location": "Garden"
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let body = parse_response_body(response).await;
    body["invitorId"].as_str().unwrap().to_string()
}

pub async fn submit_rsvp(app: &Router, invitor_id: &str, guest_name: &str, status: &str) -> Value {
    let request = json_request(
        Method::POST,
        "/api/rsvp",
        json!({
            "invitorId": invitor_id,
            "guestName": guest_name,
            "status": status
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    parse_response_body(response).await
}
