//! Integration tests for the organizer and invitee pages and invitation
//! creation.

mod common;

use axum::http::{Method, StatusCode, header};
use common::{
    create_garden_invitation, create_test_app, get_request, json_request, parse_response_body,
    response_text,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_invitor_page_is_served() {
    let app = create_test_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = response_text(response).await;
    assert!(html.contains("Create your invitation"));
}

#[tokio::test]
async fn test_create_invitation_returns_invitor_id() {
    let app = create_test_app().await;

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
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);

    let invitor_id = body["invitorId"].as_str().unwrap();
    assert_eq!(invitor_id.len(), 8);
    assert!(invitor_id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_invitee_page_shows_invitation() {
    let app = create_test_app().await;
    let invitor_id = create_garden_invitation(&app).await;

    let response = app
        .oneshot(get_request(&format!("/{}", invitor_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response_text(response).await;
    assert!(html.contains(&format!(r#""invitorId":"{}""#, invitor_id)));
    assert!(html.contains(r#""coupleName1":"Alice""#));
    assert!(html.contains(r#""coupleName2":"Bob""#));
    assert!(html.contains(r#""date":"2025-06-01""#));
    assert!(html.contains(r#""location":"Garden""#));
}

#[tokio::test]
async fn test_unknown_invitation_is_plain_text_404() {
    let app = create_test_app().await;

    let response = app.oneshot(get_request("/doesNotX")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response_text(response).await, "Invitation not found.");
}

#[tokio::test]
async fn test_create_invitation_with_missing_field_is_rejected() {
    let app = create_test_app().await;

    let request = json_request(
        Method::POST,
        "/",
        json!({
            "coupleName1": "Alice",
            "coupleName2": "Bob",
            "date": "2025-06-01"
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_each_invitation_gets_its_own_id() {
    let app = create_test_app().await;

    let first = create_garden_invitation(&app).await;
    let second = create_garden_invitation(&app).await;
    assert_ne!(first, second);
}
