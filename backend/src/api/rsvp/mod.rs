//! Module for RSVP API endpoints.
//!
//! This module records guest responses and lists them per invitation.

pub mod handlers;
pub mod routes;
