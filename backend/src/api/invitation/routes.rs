//! Defines the HTTP routes for invitations.
//!
//! `/{invitor_id}` is the shareable link handed to guests.

use super::handlers::{create_invitation, invitee_page, invitor_page};
use axum::{Router, routing::get};

pub fn invitation_router() -> Router {
    Router::new()
        .route("/", get(invitor_page).post(create_invitation))
        .route("/{invitor_id}", get(invitee_page))
}
