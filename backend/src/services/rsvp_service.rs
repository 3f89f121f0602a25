//! RSVP business logic service.
//!
//! Records guest responses and lists them per invitation. Responses are
//! accepted for any invitation id, known or not, and duplicates are kept.

use crate::database::models::{GuestSummary, RsvpRequest};
use crate::errors::ServiceResult;
use crate::repositories::guest_repository::GuestRepository;
use crate::services::id_issuer::IdIssuer;
use sqlx::SqlitePool;

pub struct RsvpService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// Issues the guest row's primary key
    issuer: &'a IdIssuer,
}

impl<'a> RsvpService<'a> {
    pub fn new(pool: &'a SqlitePool, issuer: &'a IdIssuer) -> Self {
        Self { pool, issuer }
    }

    /// Records one RSVP and returns the new guest id.
    pub async fn record_rsvp(&self, request: RsvpRequest) -> ServiceResult<String> {
        let repo = GuestRepository::new(self.pool);
        let repo = &repo;
        let request = &request;

        let guest = self
            .issuer
            .issue("Guest", move |id| async move {
                repo.create_guest(&id, request).await
            })
            .await?;

        tracing::info!(
            "Guest {} ({}) responded '{}' to invitation {}",
            guest.id,
            guest.name,
            guest.status,
            guest.invitor_id
        );
        Ok(guest.id)
    }

    /// Lists `{name, status}` for every response to an invitation. Unknown
    /// invitations yield an empty list.
    pub async fn list_guests(&self, invitor_id: &str) -> ServiceResult<Vec<GuestSummary>> {
        let repo = GuestRepository::new(self.pool);
        let guests = repo.get_guests_by_invitor_id(invitor_id).await?;

        Ok(guests)
    }
}
