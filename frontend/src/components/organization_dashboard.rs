//! Organization dashboard: own opportunities newest first, a create form in
//! a top sheet, a read-only details sheet and recommended volunteers.

use common::error::ApiError;
use common::model::opportunity::{sort_newest_first, NewOpportunity, Opportunity, OpportunityId};
use common::model::organization::RecommendedVolunteer;
use common::model::split_list;
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice, textarea_value};
use crate::sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct OrganizationDashboardProps {
    pub client: ClientHandle,
    pub on_auth_lost: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Field {
    Title,
    Description,
    Location,
    Date,
    Duration,
    Skills,
    VolunteersNeeded,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<Opportunity>, ApiError>),
    Recommendations(Vec<RecommendedVolunteer>),
    OpenCreate,
    CloseCreate,
    SetField(Field, String),
    Submit,
    Created(Result<Opportunity, ApiError>),
    Select(OpportunityId),
    CloseDetails,
}

/// Raw form text; numbers are parsed on submit.
#[derive(Default)]
struct OpportunityForm {
    title: String,
    description: String,
    location: String,
    date: String,
    duration: String,
    skills: String,
    volunteers_needed: String,
}

impl OpportunityForm {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Location => self.location = value,
            Field::Date => self.date = value,
            Field::Duration => self.duration = value,
            Field::Skills => self.skills = value,
            Field::VolunteersNeeded => self.volunteers_needed = value,
        }
    }

    fn build(&self) -> Result<NewOpportunity, Notice> {
        if self.title.trim().is_empty() || self.date.trim().is_empty() {
            return Err(Notice::error("Title and date are required"));
        }
        let duration = self
            .duration
            .trim()
            .parse()
            .map_err(|_| Notice::error("Duration must be a whole number of hours"))?;
        let volunteers_needed = self
            .volunteers_needed
            .trim()
            .parse()
            .ok()
            .filter(|needed: &u32| *needed > 0)
            .ok_or_else(|| Notice::error("Volunteers needed must be at least 1"))?;

        Ok(NewOpportunity {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            date: self.date.trim().to_string(),
            duration,
            skills_required: split_list(&self.skills),
            volunteers_needed,
        })
    }
}

pub struct OrganizationDashboard {
    opportunities: Vec<Opportunity>,
    recommendations: Vec<RecommendedVolunteer>,
    form: OpportunityForm,
    create_open: bool,
    submitting: bool,
    selected: Option<OpportunityId>,
    loaded: bool,
}

impl OrganizationDashboard {
    fn report(ctx: &Context<Self>, err: &ApiError, prefix: &str) {
        show_notice(&Notice::error(format!("{prefix}: {}", err.user_message())));
        if err.requires_login() {
            ctx.props().on_auth_lost.emit(());
        }
    }

    fn field(ctx: &Context<Self>, label: &str, field: Field, value: &str, kind: &str) -> Html {
        html! {
            <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                { label.to_string() }
                <input
                    type={kind.to_string()}
                    value={value.to_string()}
                    oninput={ctx.link().callback(move |e| Msg::SetField(field, input_value(e)))}
                />
            </label>
        }
    }

    fn create_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        html! {
            <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                { Self::field(ctx, "Title", Field::Title, &form.title, "text") }
                <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                    { "Description" }
                    <textarea
                        rows="4"
                        value={form.description.clone()}
                        oninput={link.callback(|e| Msg::SetField(Field::Description, textarea_value(e)))}
                    />
                </label>
                { Self::field(ctx, "Location", Field::Location, &form.location, "text") }
                { Self::field(ctx, "Date", Field::Date, &form.date, "date") }
                { Self::field(ctx, "Duration (hours)", Field::Duration, &form.duration, "number") }
                { Self::field(ctx, "Skills (comma separated)", Field::Skills, &form.skills, "text") }
                { Self::field(ctx, "Volunteers needed", Field::VolunteersNeeded, &form.volunteers_needed, "number") }
                <button type="submit" disabled={self.submitting}>
                    { if self.submitting { "Creating..." } else { "Create opportunity" } }
                </button>
            </form>
        }
    }

    fn details(&self) -> Html {
        let Some(opportunity) = self
            .selected
            .and_then(|id| self.opportunities.iter().find(|o| o.id == id))
        else {
            return html! {};
        };
        html! {
            <div>
                <p>{ opportunity.description.clone() }</p>
                <p>{ format!("Location: {}", opportunity.location) }</p>
                <p>{ format!("Date: {}", opportunity.date) }</p>
                <p>
                    { format!(
                        "Volunteers: {}/{}",
                        opportunity.volunteers_registered, opportunity.volunteers_needed
                    ) }
                </p>
                if let Some(count) = opportunity.applications_count {
                    <p>{ format!("Applications: {count}") }</p>
                }
                <p>{ format!("Skills: {}", opportunity.skills_required.join(", ")) }</p>
            </div>
        }
    }

    fn recommendations(&self) -> Html {
        if self.recommendations.is_empty() {
            return html! { <p>{ "No recommendations yet." }</p> };
        }
        html! {
            <ul>
                { for self.recommendations.iter().map(|volunteer| html! {
                    <li key={volunteer.volunteer_id.to_string()}>
                        <strong>{ volunteer.name.clone() }</strong>
                        { format!(" · {} · rating {:.1}", volunteer.skills.join(", "), volunteer.rating) }
                    </li>
                }) }
            </ul>
        }
    }
}

impl Component for OrganizationDashboard {
    type Message = Msg;
    type Properties = OrganizationDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            opportunities: Vec::new(),
            recommendations: Vec::new(),
            form: OpportunityForm::default(),
            create_open: false,
            submitting: false,
            selected: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = client.list_opportunities().await;
                    link.send_message(Msg::Loaded(result));
                    let volunteers = client.recommended_volunteers().await;
                    link.send_message(Msg::Recommendations(volunteers));
                });
                false
            }
            Msg::Loaded(Ok(mut opportunities)) => {
                sort_newest_first(&mut opportunities);
                self.opportunities = opportunities;
                true
            }
            Msg::Loaded(Err(err)) => {
                log::warn!("loading organization opportunities failed: {err}");
                Self::report(ctx, &err, "Failed to load opportunities");
                false
            }
            Msg::Recommendations(volunteers) => {
                self.recommendations = volunteers;
                true
            }
            Msg::OpenCreate => {
                self.create_open = true;
                true
            }
            Msg::CloseCreate => {
                self.create_open = false;
                true
            }
            Msg::SetField(field, value) => {
                self.form.set(field, value);
                true
            }
            Msg::Submit => {
                let new = match self.form.build() {
                    Ok(new) => new,
                    Err(notice) => {
                        show_notice(&notice);
                        return false;
                    }
                };
                self.submitting = true;
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = client.create_opportunity(&new).await;
                    link.send_message(Msg::Created(result));
                });
                true
            }
            Msg::Created(Ok(opportunity)) => {
                self.submitting = false;
                self.create_open = false;
                self.form = OpportunityForm::default();
                self.opportunities.push(opportunity);
                sort_newest_first(&mut self.opportunities);
                show_notice(&Notice::success("Opportunity created successfully!"));
                true
            }
            Msg::Created(Err(err)) => {
                self.submitting = false;
                Self::report(ctx, &err, "Failed to create opportunity");
                true
            }
            Msg::Select(id) => {
                self.selected = Some(id);
                true
            }
            Msg::CloseDetails => {
                self.selected = None;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let details_title = self
            .selected
            .and_then(|id| self.opportunities.iter().find(|o| o.id == id))
            .map(|o| o.title.clone())
            .unwrap_or_default();

        html! {
            <section class="organization-dashboard">
                <div style="display:flex;justify-content:space-between;align-items:center;">
                    <h1>{ "Your opportunities" }</h1>
                    <button onclick={link.callback(|_| Msg::OpenCreate)}>{ "New opportunity" }</button>
                </div>
                if self.opportunities.is_empty() {
                    <p>{ "You have not posted any opportunities yet." }</p>
                } else {
                    <table style="width:100%;border-collapse:collapse;">
                        <thead>
                            <tr>
                                <th>{ "Title" }</th>
                                <th>{ "Date" }</th>
                                <th>{ "Volunteers" }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.opportunities.iter().map(|opportunity| {
                                let id = opportunity.id;
                                html! {
                                    <tr key={id.to_string()}>
                                        <td>{ opportunity.title.clone() }</td>
                                        <td>{ opportunity.date.clone() }</td>
                                        <td>{ format!("{}/{}", opportunity.volunteers_registered, opportunity.volunteers_needed) }</td>
                                        <td>
                                            <button onclick={link.callback(move |_| Msg::Select(id))}>{ "Details" }</button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                }
                <h2>{ "Recommended volunteers" }</h2>
                { self.recommendations() }

                <TopSheet
                    open={self.create_open}
                    title="Create opportunity"
                    on_close={link.callback(|_| Msg::CloseCreate)}
                >
                    { self.create_form(ctx) }
                </TopSheet>
                <TopSheet
                    open={self.selected.is_some()}
                    title={details_title}
                    on_close={link.callback(|_| Msg::CloseDetails)}
                >
                    { self.details() }
                </TopSheet>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OpportunityForm {
        OpportunityForm {
            title: " Park cleanup ".to_string(),
            description: "Bring gloves".to_string(),
            location: "Riverside".to_string(),
            date: "2024-07-01".to_string(),
            duration: "3".to_string(),
            skills: "organizing, medical".to_string(),
            volunteers_needed: "8".to_string(),
        }
    }

    #[test]
    fn form_builds_trimmed_opportunity() {
        let new = filled().build().expect("valid form");
        assert_eq!(new.title, "Park cleanup");
        assert_eq!(new.duration, 3);
        assert_eq!(new.volunteers_needed, 8);
        assert_eq!(new.skills_required, vec!["organizing", "medical"]);
    }

    #[test]
    fn form_rejects_zero_volunteers() {
        let mut form = filled();
        form.volunteers_needed = "0".to_string();
        assert!(form.build().is_err());
    }

    #[test]
    fn form_requires_title() {
        let mut form = filled();
        form.title = "  ".to_string();
        assert!(form.build().is_err());
    }
}
