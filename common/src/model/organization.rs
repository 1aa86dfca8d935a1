use serde::{Deserialize, Serialize};

/// Organization profile from `GET /api/organization/profile/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub email: String,
}

/// Partial update for `PATCH /api/organization/profile/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A volunteer suggested to an organization by the matching service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedVolunteer {
    pub volunteer_id: u64,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub rating: f64,
}

/// Envelope of `GET /api/recommendations/volunteers/`. The server answers
/// with `{"message": ...}` and no list when it has nothing to suggest.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecommendationsEnvelope {
    #[serde(default)]
    pub volunteers: Option<Vec<RecommendedVolunteer>>,
}
