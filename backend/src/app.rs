//! Assembles the application router.

use crate::api;
use crate::services::id_issuer::IdIssuer;
use axum::{Extension, Router};
use sqlx::SqlitePool;

/// Builds the router with the pool and id issuer available to every handler.
pub fn create_app(pool: SqlitePool, issuer: IdIssuer) -> Router {
    Router::new()
        .merge(api::invitation::routes::invitation_router())
        .nest("/api", api::rsvp::routes::rsvp_router())
        .layer(Extension(pool))
        .layer(Extension(issuer))
}
