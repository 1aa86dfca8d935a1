use serde::{Deserialize, Serialize};

pub type OpportunityId = u64;

/// The organization that posted an opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    pub id: u64,
    pub name: String,
}

/// A volunteering engagement as returned by `GET /api/opportunities/`.
///
/// The list is fetched fresh on every reload: the server is the source of
/// truth for `volunteers_registered` and for the `applied` flag, which is
/// computed for the volunteer making the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD` or a full timestamp). Filtering matches on the raw text.
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub volunteers_needed: u32,
    #[serde(default)]
    pub volunteers_registered: u32,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    /// Missing from the organization's own listing.
    #[serde(default)]
    pub organization: Option<OrganizationRef>,
    /// Whether the requesting volunteer has applied. Absent means `false`.
    #[serde(default)]
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications_count: Option<u32>,
}

impl Opportunity {
    /// No spots left. The server may overshoot, so this is `>=` rather than `==`.
    pub fn is_full(&self) -> bool {
        self.volunteers_registered >= self.volunteers_needed
    }

    pub fn spots_left(&self) -> u32 {
        self.volunteers_needed
            .saturating_sub(self.volunteers_registered)
    }
}

/// Payload for `POST /api/opportunities/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewOpportunity {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    /// Hours.
    pub duration: u32,
    pub skills_required: Vec<String>,
    pub volunteers_needed: u32,
}

/// Wire body for a create request; new opportunities always start with no
/// registrations.
#[derive(Debug, Serialize)]
pub(crate) struct CreateOpportunityBody<'a> {
    #[serde(flatten)]
    pub opportunity: &'a NewOpportunity,
    pub volunteers_registered: u32,
}

/// Orders opportunities newest first by `created_at`.
///
/// Timestamps are ISO-8601 strings from the server, which sort
/// chronologically as text.
pub fn sort_newest_first(opportunities: &mut [Opportunity]) {
    opportunities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity(id: OpportunityId, created_at: &str) -> Opportunity {
        Opportunity {
            id,
            title: format!("Opportunity {id}"),
            description: String::new(),
            date: "2024-06-01".to_string(),
            location: String::new(),
            volunteers_needed: 3,
            volunteers_registered: 0,
            skills_required: Vec::new(),
            created_at: created_at.to_string(),
            organization: None,
            applied: false,
            applications_count: None,
        }
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": 7,
            "title": "Food bank",
            "date": "2024-05-12",
            "volunteers_needed": 4
        }"#;
        let parsed: Opportunity = serde_json::from_str(json).expect("valid opportunity");
        assert!(!parsed.applied);
        assert_eq!(parsed.volunteers_registered, 0);
        assert!(parsed.skills_required.is_empty());
        assert!(parsed.organization.is_none());
    }

    #[test]
    fn full_when_registrations_reach_capacity() {
        let mut opp = opportunity(1, "");
        opp.volunteers_needed = 2;
        opp.volunteers_registered = 2;
        assert!(opp.is_full());
        assert_eq!(opp.spots_left(), 0);

        opp.volunteers_registered = 3;
        assert!(opp.is_full());
        assert_eq!(opp.spots_left(), 0);
    }

    #[test]
    fn create_body_starts_with_zero_registrations() {
        let new = NewOpportunity {
            title: "Park cleanup".to_string(),
            volunteers_needed: 10,
            skills_required: crate::model::split_list(" organizing, ,medical "),
            ..Default::default()
        };
        let body = serde_json::to_value(CreateOpportunityBody {
            opportunity: &new,
            volunteers_registered: 0,
        })
        .expect("serializable");

        assert_eq!(body["volunteers_registered"], 0);
        assert_eq!(body["skills_required"], serde_json::json!(["organizing", "medical"]));
        assert_eq!(body["title"], "Park cleanup");
    }

    #[test]
    fn newest_first_ordering() {
        let mut list = vec![
            opportunity(1, "2024-01-01T10:00:00Z"),
            opportunity(2, "2024-03-01T10:00:00Z"),
            opportunity(3, "2024-02-01T10:00:00Z"),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<_> = list.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
