//! Runtime state of the volunteer dashboard.
//!
//! The opportunity list and the per-card application states live in the
//! platform independent [`OpportunityBoard`]; this component only adds the
//! filter form and a guard for the first load.

use common::board::OpportunityBoard;
use common::filter::FilterCriteria;

/// Skill tags offered as filter chips.
pub const SKILL_OPTIONS: [&str; 5] = ["teaching", "mentoring", "organizing", "technical", "medical"];

pub struct VolunteerDashboard {
    pub board: OpportunityBoard,
    pub criteria: FilterCriteria,
    /// Set once the first load was requested.
    pub loaded: bool,
}

impl VolunteerDashboard {
    pub fn new() -> Self {
        Self {
            board: OpportunityBoard::new(),
            criteria: FilterCriteria::default(),
            loaded: false,
        }
    }
}
