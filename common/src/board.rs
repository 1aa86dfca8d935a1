//! Volunteer dashboard view-model: the fetched opportunity list, its filter
//! and the per-opportunity application state machine.
//!
//! ```text
//!                 apply ok                      first toggle
//!   NotApplied ─────────────▶ Applied ─────────────────────────▶ PendingWithdrawalConfirmation
//!       ▲   │ apply failed      ▲  ▲         cancel_withdrawal            │
//!       │   └─(stays)           │  └──────────────────────────────────────┤
//!       │                       └─────────── withdraw failed ─────────────┤
//!       └──────────────────────────────────── withdraw ok ────────────────┘
//! ```
//!
//! A full opportunity refuses to leave `NotApplied` and nothing is sent.
//! Every successful apply/withdraw is followed by a full reload because the
//! server owns `volunteers_registered`.
//!
//! The UI drives the machine in steps ([`OpportunityBoard::begin_toggle`],
//! then the network call, then [`OpportunityBoard::finish_apply`] or
//! [`OpportunityBoard::finish_withdraw`]) so the component state is never
//! borrowed across an await. [`OpportunityBoard::toggle_application`] chains
//! the same steps for callers that can hold `&mut self` across awaits.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::filter::{FilterCriteria, apply_filter};
use crate::model::opportunity::{Opportunity, OpportunityId};
use crate::notice::Notice;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationState {
    #[default]
    NotApplied,
    Applied,
    /// Applied, and the user pressed withdraw once. The next toggle sends the
    /// withdraw request.
    PendingWithdrawalConfirmation,
}

/// What [`OpportunityBoard::begin_toggle`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// Nothing to send.
    Blocked(Notice),
    /// Moved into the confirmation gate; nothing to send yet.
    AwaitingConfirmation(Notice),
    /// Send the apply request, then call `finish_apply`.
    Apply(OpportunityId),
    /// Send the withdraw request, then call `finish_withdraw`.
    Withdraw(OpportunityId),
}

/// Result of a finished apply/withdraw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub notice: Notice,
    /// The list must be fetched again to pick up server counts.
    pub reload: bool,
}

/// The calls the board needs from the API.
#[async_trait(?Send)]
pub trait OpportunityApi {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, ApiError>;
    async fn apply(&self, id: OpportunityId) -> Result<(), ApiError>;
    async fn withdraw(&self, id: OpportunityId) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport, S: SessionStore> OpportunityApi for ApiClient<T, S> {
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, ApiError> {
        ApiClient::list_opportunities(self).await
    }

    async fn apply(&self, id: OpportunityId) -> Result<(), ApiError> {
        ApiClient::apply(self, id).await
    }

    async fn withdraw(&self, id: OpportunityId) -> Result<(), ApiError> {
        ApiClient::withdraw(self, id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpportunityBoard {
    opportunities: Vec<Opportunity>,
    states: HashMap<OpportunityId, ApplicationState>,
    loading: bool,
}

impl OpportunityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn get(&self, id: OpportunityId) -> Option<&Opportunity> {
        self.opportunities.iter().find(|opportunity| opportunity.id == id)
    }

    pub fn state(&self, id: OpportunityId) -> ApplicationState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replaces the collection with a fresh server list.
    ///
    /// States are recomputed from each item's `applied` flag. A pending
    /// withdrawal confirmation survives when the server still reports the
    /// application, so a reload triggered elsewhere does not cancel it.
    pub fn replace(&mut self, opportunities: Vec<Opportunity>) {
        let states = opportunities
            .iter()
            .map(|opportunity| {
                let state = match (opportunity.applied, self.state(opportunity.id)) {
                    (true, ApplicationState::PendingWithdrawalConfirmation) => {
                        ApplicationState::PendingWithdrawalConfirmation
                    }
                    (true, _) => ApplicationState::Applied,
                    (false, _) => ApplicationState::NotApplied,
                };
                (opportunity.id, state)
            })
            .collect();

        log::debug!("board reloaded with {} opportunities", opportunities.len());
        self.opportunities = opportunities;
        self.states = states;
        self.loading = false;
    }

    /// Records a failed load. The previous collection and states are kept.
    pub fn load_failed(&mut self, err: &ApiError) -> Notice {
        log::warn!("loading opportunities failed: {err}");
        self.loading = false;
        Notice::error("Failed to load opportunities")
    }

    pub fn apply_filter(&self, criteria: &FilterCriteria) -> Vec<&Opportunity> {
        apply_filter(&self.opportunities, criteria)
    }

    /// First half of a toggle: decides whether a request is needed.
    pub fn begin_toggle(&mut self, id: OpportunityId) -> Toggle {
        let Some(opportunity) = self.get(id) else {
            return Toggle::Blocked(Notice::error("Opportunity not found"));
        };

        match self.state(id) {
            ApplicationState::NotApplied if opportunity.is_full() => {
                log::debug!("opportunity {id} is full, apply refused");
                Toggle::Blocked(Notice::error("This opportunity is full"))
            }
            ApplicationState::NotApplied => Toggle::Apply(id),
            ApplicationState::Applied => {
                self.set_state(id, ApplicationState::PendingWithdrawalConfirmation);
                Toggle::AwaitingConfirmation(Notice::info("Click again to confirm withdrawal"))
            }
            ApplicationState::PendingWithdrawalConfirmation => Toggle::Withdraw(id),
        }
    }

    pub fn finish_apply(&mut self, id: OpportunityId, result: Result<(), ApiError>) -> Settled {
        match result {
            Ok(()) => {
                self.set_state(id, ApplicationState::Applied);
                Settled {
                    notice: Notice::success("Application submitted successfully!"),
                    reload: true,
                }
            }
            Err(err) => {
                log::warn!("apply to {id} failed: {err}");
                Settled {
                    notice: Notice::error(format!(
                        "Failed to submit application: {}",
                        err.user_message()
                    )),
                    reload: false,
                }
            }
        }
    }

    /// A failed withdrawal drops back to `Applied`: the server still holds the
    /// application and the user has to confirm again.
    pub fn finish_withdraw(&mut self, id: OpportunityId, result: Result<(), ApiError>) -> Settled {
        match result {
            Ok(()) => {
                self.set_state(id, ApplicationState::NotApplied);
                Settled {
                    notice: Notice::success("Application withdrawn"),
                    reload: true,
                }
            }
            Err(err) => {
                log::warn!("withdraw from {id} failed: {err}");
                self.set_state(id, ApplicationState::Applied);
                Settled {
                    notice: Notice::error(format!(
                        "Failed to withdraw application: {}",
                        err.user_message()
                    )),
                    reload: false,
                }
            }
        }
    }

    /// Leaves the confirmation gate without sending anything. Returns whether
    /// the state changed.
    pub fn cancel_withdrawal(&mut self, id: OpportunityId) -> bool {
        if self.state(id) == ApplicationState::PendingWithdrawalConfirmation {
            self.set_state(id, ApplicationState::Applied);
            true
        } else {
            false
        }
    }

    fn set_state(&mut self, id: OpportunityId, state: ApplicationState) {
        log::debug!("opportunity {id}: {:?} -> {state:?}", self.state(id));
        self.states.insert(id, state);
    }

    /// Fetches the list. Returns the failure notice, if any.
    pub async fn load_opportunities<A: OpportunityApi + ?Sized>(&mut self, api: &A) -> Option<Notice> {
        self.start_loading();
        match api.list_opportunities().await {
            Ok(opportunities) => {
                self.replace(opportunities);
                None
            }
            Err(err) => Some(self.load_failed(&err)),
        }
    }

    /// Runs one toggle to completion, reload included. Returns the notices
    /// to show, in order.
    pub async fn toggle_application<A: OpportunityApi + ?Sized>(
        &mut self,
        api: &A,
        id: OpportunityId,
    ) -> Vec<Notice> {
        let settled = match self.begin_toggle(id) {
            Toggle::Blocked(notice) | Toggle::AwaitingConfirmation(notice) => return vec![notice],
            Toggle::Apply(id) => {
                let result = api.apply(id).await;
                self.finish_apply(id, result)
            }
            Toggle::Withdraw(id) => {
                let result = api.withdraw(id).await;
                self.finish_withdraw(id, result)
            }
        };

        let mut notices = vec![settled.notice];
        if settled.reload {
            notices.extend(self.load_opportunities(api).await);
        }
        notices
    }
}
