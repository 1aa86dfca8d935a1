//! Login and registration payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of both login endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    /// Only the volunteer endpoint reports it; it must read `"volunteer"` there.
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Response of both registration endpoints. Registration hands back the
/// access token as `token`, not `access`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Payload for `POST /api/register/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VolunteerRegistration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub availability: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Payload for `POST /api/register/organization/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationRegistration {
    pub email: String,
    pub password: String,
    /// Contact person.
    pub first_name: String,
    pub last_name: String,
    /// Organization name.
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub category: String,
}

/// Organizations sign in by email, so the username is always the email.
#[derive(Debug, Serialize)]
pub(crate) struct OrganizationSignupBody<'a> {
    #[serde(flatten)]
    pub registration: &'a OrganizationRegistration,
    pub username: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogoutBody<'a> {
    pub refresh: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_signup_uses_email_as_username() {
        let registration = OrganizationRegistration {
            email: "hello@shelter.org".to_string(),
            name: "City Shelter".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(OrganizationSignupBody {
            registration: &registration,
            username: &registration.email,
        })
        .expect("serializable");

        assert_eq!(body["username"], "hello@shelter.org");
        assert_eq!(body["name"], "City Shelter");
        assert!(body.get("website").is_none());
    }

    #[test]
    fn login_response_without_refresh_or_type() {
        let parsed: LoginResponse =
            serde_json::from_str(r#"{"access":"abc"}"#).expect("valid response");
        assert_eq!(parsed.access, "abc");
        assert_eq!(parsed.refresh, None);
        assert_eq!(parsed.user_type, None);
    }
}
