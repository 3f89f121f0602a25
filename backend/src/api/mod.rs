//! Central module for organizing the application's HTTP endpoints.
//!
//! This module acts as a top-level container for the API areas: invitation
//! pages and creation, and guest RSVPs.

pub mod common;
pub mod invitation;
pub mod rsvp;
