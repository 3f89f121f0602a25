//! Invitation business logic service.
//!
//! Handles creating invitations and looking them up by their shareable id.

use crate::database::models::{CreateInvitationRequest, Invitation};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::invitation_repository::InvitationRepository;
use crate::services::id_issuer::IdIssuer;
use sqlx::SqlitePool;

pub struct InvitationService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// Issues the invitation's primary key
    issuer: &'a IdIssuer,
}

impl<'a> InvitationService<'a> {
    /// Creates a new InvitationService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `issuer` - Identifier issuer used for new invitations
    pub fn new(pool: &'a SqlitePool, issuer: &'a IdIssuer) -> Self {
        Self { pool, issuer }
    }

    /// Stores a new invitation and returns its shareable identifier.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Storage failures
    /// - Running out of attempts to find an unused id
    pub async fn create_invitation(&self, request: CreateInvitationRequest) -> ServiceResult<String> {
        let repo = InvitationRepository::new(self.pool);
        let repo = &repo;
        let request = &request;

        let invitation = self
            .issuer
            .issue("Invitation", move |id| async move {
                repo.create_invitation(&id, request).await
            })
            .await?;

        tracing::info!(
            "Invitation {} created for {} & {}",
            invitation.id,
            invitation.couple_name1,
            invitation.couple_name2
        );
        Ok(invitation.id)
    }

    /// Looks up an invitation. Absence is `Ok(None)`, not an error.
    pub async fn get_invitation(&self, id: &str) -> ServiceResult<Option<Invitation>> {
        let repo = InvitationRepository::new(self.pool);
        let invitation = repo.get_invitation_by_id(id).await?;

        Ok(invitation)
    }

    /// Retrieves an invitation by ID with existence verification.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the invitation doesn't exist
    pub async fn get_invitation_required(&self, id: &str) -> ServiceResult<Invitation> {
        self.get_invitation(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invitation", id))
    }
}
