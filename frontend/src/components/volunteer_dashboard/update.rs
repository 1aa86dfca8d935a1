//! Update function for the volunteer dashboard.
//!
//! Network calls run in `spawn_local` and report back through a message, so
//! the board is only ever touched synchronously here. A toggle is split in
//! three steps: `begin_toggle` decides, the request runs, then
//! `finish_apply` / `finish_withdraw` settles and may ask for a reload.

use common::board::{Settled, Toggle};
use common::error::ApiError;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::show_notice;

use super::messages::Msg;
use super::state::VolunteerDashboard;

pub fn update(
    component: &mut VolunteerDashboard,
    ctx: &Context<VolunteerDashboard>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            component.board.start_loading();
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.list_opportunities().await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(Ok(opportunities)) => {
            component.board.replace(opportunities);
            true
        }
        Msg::Loaded(Err(err)) => {
            let notice = component.board.load_failed(&err);
            report_auth_loss(ctx, &err);
            show_notice(&notice);
            true
        }
        Msg::SetSearch(value) => {
            component.criteria.search = value;
            true
        }
        Msg::SetLocation(value) => {
            component.criteria.location = value;
            true
        }
        Msg::SetDate(value) => {
            component.criteria.date = value;
            true
        }
        Msg::ToggleSkill(skill) => {
            component.criteria.toggle_skill(&skill);
            true
        }
        Msg::ClearFilters => {
            component.criteria = Default::default();
            true
        }
        Msg::Toggle(id) => {
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            match component.board.begin_toggle(id) {
                Toggle::Blocked(notice) | Toggle::AwaitingConfirmation(notice) => {
                    show_notice(&notice);
                }
                Toggle::Apply(id) => spawn_local(async move {
                    let result = client.apply(id).await;
                    link.send_message(Msg::Applied(id, result));
                }),
                Toggle::Withdraw(id) => spawn_local(async move {
                    let result = client.withdraw(id).await;
                    link.send_message(Msg::Withdrawn(id, result));
                }),
            }
            true
        }
        Msg::Applied(id, result) => {
            let lost = result.as_ref().err().map(|err| err.requires_login());
            let settled = component.board.finish_apply(id, result);
            settle(ctx, settled, lost.unwrap_or(false));
            true
        }
        Msg::Withdrawn(id, result) => {
            let lost = result.as_ref().err().map(|err| err.requires_login());
            let settled = component.board.finish_withdraw(id, result);
            settle(ctx, settled, lost.unwrap_or(false));
            true
        }
        Msg::CancelWithdrawal(id) => component.board.cancel_withdrawal(id),
    }
}

fn settle(ctx: &Context<VolunteerDashboard>, settled: Settled, auth_lost: bool) {
    show_notice(&settled.notice);
    if auth_lost {
        ctx.props().on_auth_lost.emit(());
    } else if settled.reload {
        ctx.link().send_message(Msg::Load);
    }
}

fn report_auth_loss(ctx: &Context<VolunteerDashboard>, err: &ApiError) {
    if err.requires_login() {
        ctx.props().on_auth_lost.emit(());
    }
}
