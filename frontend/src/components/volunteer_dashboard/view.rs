//! View rendering for the volunteer dashboard: a filter bar above a grid of
//! opportunity cards. Only the filtered subset is rendered; the board keeps
//! the full list.

use common::board::ApplicationState;
use common::model::opportunity::Opportunity;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::input_value;

use super::messages::Msg;
use super::state::{VolunteerDashboard, SKILL_OPTIONS};

pub fn view(component: &VolunteerDashboard, ctx: &Context<VolunteerDashboard>) -> Html {
    let link = ctx.link();
    let visible = component.board.apply_filter(&component.criteria);

    let body = if component.board.is_loading() && component.board.opportunities().is_empty() {
        html! { <p>{ "Loading opportunities..." }</p> }
    } else if visible.is_empty() {
        html! { <p>{ "No opportunities match your filters." }</p> }
    } else {
        html! {
            <div style="display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:16px;">
                { for visible.into_iter().map(|opportunity| build_card(component, opportunity, link)) }
            </div>
        }
    };

    html! {
        <section class="volunteer-dashboard">
            <h1>{ "Volunteer opportunities" }</h1>
            { build_filters(component, link) }
            { body }
        </section>
    }
}

fn build_filters(component: &VolunteerDashboard, link: &Scope<VolunteerDashboard>) -> Html {
    let criteria = &component.criteria;
    html! {
        <div class="filters" style="display:flex;flex-wrap:wrap;gap:12px;margin-bottom:24px;">
            <input
                type="text"
                placeholder="Search opportunities"
                value={criteria.search.clone()}
                oninput={link.callback(|e| Msg::SetSearch(input_value(e)))}
            />
            <input
                type="text"
                placeholder="Location"
                value={criteria.location.clone()}
                oninput={link.callback(|e| Msg::SetLocation(input_value(e)))}
            />
            <input
                type="date"
                value={criteria.date.clone()}
                oninput={link.callback(|e| Msg::SetDate(input_value(e)))}
            />
            <div style="display:flex;gap:8px;">
                { for SKILL_OPTIONS.into_iter().map(|skill| skill_chip(skill, criteria.skills.contains(skill), link)) }
            </div>
            if !criteria.is_empty() {
                <button onclick={link.callback(|_| Msg::ClearFilters)}>{ "Clear filters" }</button>
            }
        </div>
    }
}

fn skill_chip(skill: &'static str, selected: bool, link: &Scope<VolunteerDashboard>) -> Html {
    let style = if selected {
        "padding:4px 10px;border-radius:999px;border:1px solid #2563eb;background:#2563eb;color:#fff;cursor:pointer;"
    } else {
        "padding:4px 10px;border-radius:999px;border:1px solid #9ca3af;background:transparent;cursor:pointer;"
    };
    html! {
        <button {style} onclick={link.callback(move |_| Msg::ToggleSkill(skill.to_string()))}>
            { skill }
        </button>
    }
}

fn build_card(
    component: &VolunteerDashboard,
    opportunity: &Opportunity,
    link: &Scope<VolunteerDashboard>,
) -> Html {
    let organization = opportunity
        .organization
        .as_ref()
        .map(|org| org.name.clone())
        .unwrap_or_default();

    html! {
        <article key={opportunity.id.to_string()} style="padding:16px;border-radius:12px;border:1px solid #e5e7eb;">
            <h3 style="margin-top:0;">{ opportunity.title.clone() }</h3>
            if !organization.is_empty() {
                <p style="color:#6b7280;">{ organization }</p>
            }
            <p>{ opportunity.description.clone() }</p>
            <p>{ format!("{} · {}", opportunity.location, opportunity.date) }</p>
            <p>
                { format!(
                    "{}/{} volunteers · {} spots left",
                    opportunity.volunteers_registered,
                    opportunity.volunteers_needed,
                    opportunity.spots_left()
                ) }
            </p>
            <div style="display:flex;flex-wrap:wrap;gap:6px;margin-bottom:12px;">
                { for opportunity.skills_required.iter().map(|skill| html! {
                    <span style="padding:2px 8px;border-radius:999px;background:#e0e7ff;">{ skill.clone() }</span>
                }) }
            </div>
            { action_buttons(component.board.state(opportunity.id), opportunity, link) }
        </article>
    }
}

fn action_buttons(
    state: ApplicationState,
    opportunity: &Opportunity,
    link: &Scope<VolunteerDashboard>,
) -> Html {
    let id = opportunity.id;
    let toggle = link.callback(move |_| Msg::Toggle(id));

    match state {
        ApplicationState::NotApplied if opportunity.is_full() => html! {
            <button disabled=true>{ "Opportunity Full" }</button>
        },
        ApplicationState::NotApplied => html! {
            <button onclick={toggle} style="background:#2563eb;color:#fff;">{ "Apply Now" }</button>
        },
        ApplicationState::Applied => html! {
            <button onclick={toggle}>{ "Withdraw Application" }</button>
        },
        ApplicationState::PendingWithdrawalConfirmation => html! {
            <div style="display:flex;gap:8px;">
                <button onclick={toggle} style="background:#dc2626;color:#fff;">{ "Confirm Withdrawal" }</button>
                <button onclick={link.callback(move |_| Msg::CancelWithdrawal(id))}>{ "Cancel" }</button>
            </div>
        },
    }
}
