//! Database repository for invitation operations.
//!
//! Provides insert and lookup for the `invitations` table.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{CreateInvitationRequest, Invitation};

/// Repository for invitation database operations.
pub struct InvitationRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> InvitationRepository<'a> {
    /// Creates a new InvitationRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new invitation under the given identifier.
    ///
    /// # Arguments
    /// * `id` - Freshly generated primary key
    /// * `invitation` - Event details supplied by the organizer
    ///
    /// # Returns
    /// The stored Invitation. Fails with a unique violation if `id` is taken.
    pub async fn create_invitation(
        &self,
        id: &str,
        invitation: &CreateInvitationRequest,
    ) -> Result<Invitation> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            INSERT INTO invitations (id, couple_name1, couple_name2, date, location)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, couple_name1, couple_name2, date, location
            "#,
        )
        .bind(id)
        .bind(&invitation.couple_name1)
        .bind(&invitation.couple_name2)
        .bind(&invitation.date)
        .bind(&invitation.location)
        .fetch_one(self.pool)
        .await?;

        Ok(invitation)
    }

    /// Retrieves an invitation by its identifier.
    ///
    /// # Returns
    /// `Some(Invitation)` if found, `None` otherwise
    pub async fn get_invitation_by_id(&self, id: &str) -> Result<Option<Invitation>> {
        let invitation = sqlx::query_as::<_, Invitation>(
            r#"
            SELECT id, couple_name1, couple_name2, date, location
            FROM invitations WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(invitation)
    }
}
