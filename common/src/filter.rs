//! Client-side opportunity filtering.
//!
//! Filtering never touches the network and never mutates the collection: the
//! dashboard recomputes the visible subset from the full list on every render.

use std::collections::BTreeSet;

use crate::model::opportunity::Opportunity;

/// Ephemeral filter state of the volunteer dashboard.
///
/// Empty fields are inactive. Active fields must all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title or the description.
    pub search: String,
    /// Case-insensitive substring of the location.
    pub location: String,
    /// Substring of the raw date text, e.g. `2024-06` or `2024-06-01`.
    pub date: String,
    /// An opportunity passes when it requires at least one of these.
    pub skills: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.location.is_empty()
            && self.date.is_empty()
            && self.skills.is_empty()
    }

    /// Adds the skill if absent, removes it otherwise.
    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_string());
        }
    }

    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        self.matches_search(opportunity)
            && self.matches_location(opportunity)
            && self.matches_date(opportunity)
            && self.matches_skills(opportunity)
    }

    fn matches_search(&self, opportunity: &Opportunity) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        opportunity.title.to_lowercase().contains(&needle)
            || opportunity.description.to_lowercase().contains(&needle)
    }

    fn matches_location(&self, opportunity: &Opportunity) -> bool {
        self.location.is_empty()
            || opportunity
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }

    fn matches_date(&self, opportunity: &Opportunity) -> bool {
        self.date.is_empty() || opportunity.date.contains(&self.date)
    }

    fn matches_skills(&self, opportunity: &Opportunity) -> bool {
        self.skills.is_empty()
            || opportunity
                .skills_required
                .iter()
                .any(|skill| self.skills.contains(skill))
    }
}

/// The subset of `opportunities` matching `criteria`, in list order.
pub fn apply_filter<'a>(
    opportunities: &'a [Opportunity],
    criteria: &FilterCriteria,
) -> Vec<&'a Opportunity> {
    opportunities
        .iter()
        .filter(|opportunity| criteria.matches(opportunity))
        .collect()
}
