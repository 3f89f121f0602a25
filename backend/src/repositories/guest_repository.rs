//! Database repository for guest RSVP records.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{Guest, GuestSummary, RsvpRequest};

/// Repository for guest database operations.
///
/// The `invitor_id` column is a logical reference only; rows are written
/// whether or not the invitation exists.
pub struct GuestRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> GuestRepository<'a> {
    /// Creates a new GuestRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts one RSVP response under the given identifier.
    pub async fn create_guest(&self, id: &str, rsvp: &RsvpRequest) -> Result<Guest> {
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (id, invitor_id, name, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, invitor_id, name, status
            "#,
        )
        .bind(id)
        .bind(&rsvp.invitor_id)
        .bind(&rsvp.guest_name)
        .bind(&rsvp.status)
        .fetch_one(self.pool)
        .await?;

        Ok(guest)
    }

    /// Retrieves every response recorded against an invitation, in the
    /// order SQLite returns them.
    pub async fn get_guests_by_invitor_id(&self, invitor_id: &str) -> Result<Vec<GuestSummary>> {
        let guests = sqlx::query_as::<_, GuestSummary>(
            r#"
            SELECT name, status FROM guests WHERE invitor_id = ?
            "#,
        )
        .bind(invitor_id)
        .fetch_all(self.pool)
        .await?;

        Ok(guests)
    }
}
