//! Event invitation and RSVP backend.
//!
//! Organizers create an invitation and get back a short shareable id;
//! guests open the invitation by that id and record their response.

pub mod api;
pub mod app;
pub mod config;
pub mod database;
pub mod errors;
pub mod pages;
pub mod repositories;
pub mod services;
pub mod utils;
