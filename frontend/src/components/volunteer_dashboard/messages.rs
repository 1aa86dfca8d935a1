use common::error::ApiError;
use common::model::opportunity::{Opportunity, OpportunityId};

pub enum Msg {
    Load,
    Loaded(Result<Vec<Opportunity>, ApiError>),
    SetSearch(String),
    SetLocation(String),
    SetDate(String),
    ToggleSkill(String),
    ClearFilters,
    /// The apply/withdraw button of one card.
    Toggle(OpportunityId),
    Applied(OpportunityId, Result<(), ApiError>),
    Withdrawn(OpportunityId, Result<(), ApiError>),
    CancelWithdrawal(OpportunityId),
}
