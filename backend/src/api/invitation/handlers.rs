//! Handler functions for invitation endpoints.
//!
//! These functions serve the organizer and invitee pages and create new
//! invitations through the invitation service.

use crate::api::common::service_error_to_http;
use crate::database::models::{CreateInvitationRequest, CreateInvitationResponse};
use crate::errors::ServiceError;
use crate::pages;
use crate::services::id_issuer::IdIssuer;
use crate::services::invitation_service::InvitationService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::Html,
};
use sqlx::SqlitePool;

const INVITATION_NOT_FOUND: &str = "Invitation not found.";

/// Serves the invitation-creation page.
#[axum::debug_handler]
pub async fn invitor_page() -> Html<&'static str> {
    Html(pages::invitor_page())
}

/// Handle invitation creation request
#[axum::debug_handler]
pub async fn create_invitation(
    Extension(pool): Extension<SqlitePool>,
    Extension(issuer): Extension<IdIssuer>,
    Json(payload): Json<CreateInvitationRequest>,
) -> Result<Json<CreateInvitationResponse>, (StatusCode, String)> {
    tracing::info!(
        "Creating invitation for {} & {}",
        payload.couple_name1,
        payload.couple_name2
    );

    let service = InvitationService::new(&pool, &issuer);
    let invitor_id = service.create_invitation(payload).await.map_err(|e| {
        tracing::error!("Failed to create invitation: {}", e);
        service_error_to_http(e)
    })?;

    Ok(Json(CreateInvitationResponse { invitor_id }))
}

/// Serves the invitee page for an invitation, or a plain-text 404.
#[axum::debug_handler]
pub async fn invitee_page(
    Extension(pool): Extension<SqlitePool>,
    Extension(issuer): Extension<IdIssuer>,
    Path(invitor_id): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let service = InvitationService::new(&pool, &issuer);
    let invitation = service
        .get_invitation(&invitor_id)
        .await
        .map_err(service_error_to_http)?
        .ok_or_else(|| {
            tracing::info!("Invitation {} not found", invitor_id);
            (StatusCode::NOT_FOUND, INVITATION_NOT_FOUND.to_string())
        })?;

    let html = pages::invitee_page(&invitor_id, &invitation.into()).map_err(|e| {
        service_error_to_http(ServiceError::internal_error(format!(
            "Failed to render invitee page: {}",
            e
        )))
    })?;

    Ok(Html(html))
}
