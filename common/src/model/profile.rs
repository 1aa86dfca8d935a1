use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A completed volunteering activity shown on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub hours: f64,
}

/// Volunteer profile from `GET /api/profile/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: ProfileUser,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
            .trim()
            .to_string()
    }
}

/// Partial update for `PATCH /api/profile/`. Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.skills.is_none()
    }
}
