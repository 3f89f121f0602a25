//! Data-access layer.
//!
//! Each repository wraps a borrowed `SqlitePool` and owns the SQL for one
//! table. Errors are returned as `anyhow::Error` and classified by the
//! service layer.

pub mod guest_repository;
pub mod invitation_repository;
