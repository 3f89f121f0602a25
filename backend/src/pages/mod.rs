//! HTML pages served to organizers and invitees.
//!
//! Templates are embedded at compile time. The invitee page receives its
//! data as a JSON island that the page script reads on load; everything
//! else happens in the browser against the JSON API.

use serde::Serialize;

use crate::database::models::InvitationDetails;

const INVITOR_TEMPLATE: &str = include_str!("../../templates/invitor.html");
const INVITEE_TEMPLATE: &str = include_str!("../../templates/invitee.html");

const DATA_PLACEHOLDER: &str = "{{INVITATION_JSON}}";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteePageData<'a> {
    invitor_id: &'a str,
    invitation: &'a InvitationDetails,
}

/// The invitation-creation page.
pub fn invitor_page() -> &'static str {
    INVITOR_TEMPLATE
}

/// The invitee page for one invitation.
pub fn invitee_page(invitor_id: &str, invitation: &InvitationDetails) -> serde_json::Result<String> {
    let data = serde_json::to_string(&InviteePageData {
        invitor_id,
        invitation,
    })?;

    Ok(INVITEE_TEMPLATE.replace(DATA_PLACEHOLDER, &escape_script_json(&data)))
}

/// Makes serialized JSON safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\u` escapes
/// decode to the same characters.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(location: &str) -> InvitationDetails {
        InvitationDetails {
            couple_name1: "Alice".to_string(),
            couple_name2: "Bob".to_string(),
            date: "2025-06-01".to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_invitor_page_is_html() {
        assert!(invitor_page().starts_with("<!DOCTYPE html>"));
        assert!(invitor_page().contains("/api/guests/"));
    }

    #[test]
    fn test_invitee_page_embeds_details() {
        let html = invitee_page("aZ3kLp9Q", &details("Garden")).unwrap();

        assert!(!html.contains(DATA_PLACEHOLDER));
        assert!(html.contains(r#""invitorId":"aZ3kLp9Q""#));
        assert!(html.contains(r#""coupleName1":"Alice""#));
        assert!(html.contains(r#""location":"Garden""#));
    }

    #[test]
    fn test_invitee_page_cannot_close_script_tag() {
        let html = invitee_page("aZ3kLp9Q", &details("</script><script>alert(1)</script>")).unwrap();

        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r"\u003c/script\u003e"));
    }

    #[test]
    fn test_escaped_json_still_parses() {
        let escaped = escape_script_json(r#"{"location":"<Tom & Jerry's>"}"#);
        let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(value["location"], "<Tom & Jerry's>");
    }
}
