//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, along with the request and response bodies of the JSON
//! API. Field names are snake_case in SQL and camelCase on the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub couple_name1: String,
    pub couple_name2: String,
    pub date: String,
    pub location: String,
}

/// Event details shown to invitees; an invitation without its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetails {
    pub couple_name1: String,
    pub couple_name2: String,
    pub date: String,
    pub location: String,
}

impl From<Invitation> for InvitationDetails {
    fn from(invitation: Invitation) -> Self {
        Self {
            couple_name1: invitation.couple_name1,
            couple_name2: invitation.couple_name2,
            date: invitation.date,
            location: invitation.location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub couple_name1: String,
    pub couple_name2: String,
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationResponse {
    pub invitor_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub invitor_id: String,
    pub name: String,
    pub status: String,
}

/// A single entry of an invitation's guest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GuestSummary {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub invitor_id: String,
    pub guest_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResponse {
    pub success: bool,
    pub guest_id: String,
}
