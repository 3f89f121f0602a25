//! Global application error types and handlers.
//!
//! This module defines the error type shared by the service layer and
//! provides helpers for consistent construction.

use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    /// Every generated identifier collided with an existing row.
    #[error("Could not issue a unique {entity} id after {attempts} attempts")]
    IdExhausted { entity: String, attempts: u32 },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn id_exhausted(entity: impl Into<String>, attempts: u32) -> Self {
        Self::IdExhausted {
            entity: entity.into(),
            attempts,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
