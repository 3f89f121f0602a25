//! Module for invitation endpoints.
//!
//! This module serves the organizer page, accepts new invitations, and
//! renders the invitee page for a shared invitation link.

pub mod handlers;
pub mod routes;
