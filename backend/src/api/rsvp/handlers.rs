//! Handler functions for RSVP endpoints.

use crate::api::common::service_error_to_http;
use crate::database::models::{GuestSummary, RsvpRequest, RsvpResponse};
use crate::services::id_issuer::IdIssuer;
use crate::services::rsvp_service::RsvpService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Records a guest's response to an invitation.
#[axum::debug_handler]
pub async fn record_rsvp(
    Extension(pool): Extension<SqlitePool>,
    Extension(issuer): Extension<IdIssuer>,
    Json(payload): Json<RsvpRequest>,
) -> Result<Json<RsvpResponse>, (StatusCode, String)> {
    tracing::info!(
        "Recording RSVP from {} for invitation {}",
        payload.guest_name,
        payload.invitor_id
    );

    let service = RsvpService::new(&pool, &issuer);
    let guest_id = service.record_rsvp(payload).await.map_err(|e| {
        tracing::error!("Failed to record RSVP: {}", e);
        service_error_to_http(e)
    })?;

    Ok(Json(RsvpResponse {
        success: true,
        guest_id,
    }))
}

/// Lists every response recorded for an invitation.
#[axum::debug_handler]
pub async fn list_guests(
    Extension(pool): Extension<SqlitePool>,
    Extension(issuer): Extension<IdIssuer>,
    Path(invitor_id): Path<String>,
) -> Result<Json<Vec<GuestSummary>>, (StatusCode, String)> {
    let service = RsvpService::new(&pool, &issuer);
    let guests = service
        .list_guests(&invitor_id)
        .await
        .map_err(service_error_to_http)?;

    tracing::info!("Found {} guests for invitation {}", guests.len(), invitor_id);
    Ok(Json(guests))
}
