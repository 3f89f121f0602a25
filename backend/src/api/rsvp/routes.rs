//! Defines the HTTP routes for guest RSVPs.

use super::handlers::{list_guests, record_rsvp};
use axum::{
    Router,
    routing::{get, post},
};

pub fn rsvp_router() -> Router {
    Router::new()
        .route("/rsvp", post(record_rsvp))
        .route("/guests/{invitor_id}", get(list_guests))
}
