//! Module for core business logic services.
//!
//! This module encapsulates services that perform the business operations
//! behind the HTTP handlers: issuing identifiers, creating and reading
//! invitations, and recording RSVPs.

pub mod id_issuer;
pub mod invitation_service;
pub mod rsvp_service;
