use common::error::ApiError;
use common::model::organization::{OrganizationProfile, OrganizationProfileUpdate};
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice, textarea_value};

#[derive(Properties, PartialEq)]
pub struct OrganizationProfileProps {
    pub client: ClientHandle,
    pub on_auth_lost: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Description,
    Location,
    Website,
    Phone,
    Category,
}

pub enum Msg {
    Loaded(Result<OrganizationProfile, ApiError>),
    StartEdit,
    CancelEdit,
    Set(Field, String),
    Save,
    Saved(Result<OrganizationProfile, ApiError>),
}

pub struct OrganizationProfilePage {
    profile: Option<OrganizationProfile>,
    draft: OrganizationProfile,
    editing: bool,
}

/// Fields of `draft` that differ from `current`. Blank optional fields are
/// sent as empty strings so they can be cleared.
fn diff(current: &OrganizationProfile, draft: &OrganizationProfile) -> OrganizationProfileUpdate {
    fn changed(old: &str, new: &str) -> Option<String> {
        let new = new.trim();
        (old != new).then(|| new.to_string())
    }
    OrganizationProfileUpdate {
        name: changed(&current.name, &draft.name),
        description: changed(&current.description, &draft.description),
        location: changed(&current.location, &draft.location),
        website: changed(
            current.website.as_deref().unwrap_or(""),
            draft.website.as_deref().unwrap_or(""),
        ),
        phone: changed(
            current.phone.as_deref().unwrap_or(""),
            draft.phone.as_deref().unwrap_or(""),
        ),
        category: changed(&current.category, &draft.category),
    }
}

impl OrganizationProfilePage {
    fn fail(ctx: &Context<Self>, err: &ApiError, prefix: &str) {
        log::warn!("{prefix}: {err}");
        show_notice(&Notice::error(format!("{prefix}: {}", err.user_message())));
        if err.requires_login() {
            ctx.props().on_auth_lost.emit(());
        }
    }

    fn input(&self, ctx: &Context<Self>, label: &str, field: Field, value: &str) -> Html {
        html! {
            <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                { label.to_string() }
                <input
                    type="text"
                    value={value.to_string()}
                    oninput={ctx.link().callback(move |e| Msg::Set(field, input_value(e)))}
                />
            </label>
        }
    }
}

impl Component for OrganizationProfilePage {
    type Message = Msg;
    type Properties = OrganizationProfileProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(client.organization_profile().await));
        });
        Self {
            profile: None,
            draft: OrganizationProfile::default(),
            editing: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(profile)) | Msg::Saved(Ok(profile)) => {
                if self.editing {
                    show_notice(&Notice::success("Profile updated"));
                }
                self.draft = profile.clone();
                self.profile = Some(profile);
                self.editing = false;
                true
            }
            Msg::Loaded(Err(err)) => {
                Self::fail(ctx, &err, "Failed to load profile");
                false
            }
            Msg::Saved(Err(err)) => {
                Self::fail(ctx, &err, "Failed to update profile");
                false
            }
            Msg::StartEdit => {
                self.editing = true;
                true
            }
            Msg::CancelEdit => {
                if let Some(profile) = &self.profile {
                    self.draft = profile.clone();
                }
                self.editing = false;
                true
            }
            Msg::Set(field, value) => {
                match field {
                    Field::Name => self.draft.name = value,
                    Field::Description => self.draft.description = value,
                    Field::Location => self.draft.location = value,
                    Field::Website => self.draft.website = Some(value),
                    Field::Phone => self.draft.phone = Some(value),
                    Field::Category => self.draft.category = value,
                }
                true
            }
            Msg::Save => {
                let Some(current) = &self.profile else {
                    return false;
                };
                let update = diff(current, &self.draft);
                if update == OrganizationProfileUpdate::default() {
                    self.editing = false;
                    return true;
                }
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = client.update_organization_profile(&update).await;
                    link.send_message(Msg::Saved(result));
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(profile) = &self.profile else {
            return html! { <p>{ "Loading profile..." }</p> };
        };

        if self.editing {
            let draft = &self.draft;
            return html! {
                <section class="organization-profile">
                    <h1>{ "Edit organization" }</h1>
                    { self.input(ctx, "Name", Field::Name, &draft.name) }
                    <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                        { "Description" }
                        <textarea
                            rows="4"
                            value={draft.description.clone()}
                            oninput={link.callback(|e| Msg::Set(Field::Description, textarea_value(e)))}
                        />
                    </label>
                    { self.input(ctx, "Location", Field::Location, &draft.location) }
                    { self.input(ctx, "Website", Field::Website, draft.website.as_deref().unwrap_or("")) }
                    { self.input(ctx, "Phone", Field::Phone, draft.phone.as_deref().unwrap_or("")) }
                    { self.input(ctx, "Category", Field::Category, &draft.category) }
                    <button onclick={link.callback(|_| Msg::Save)}>{ "Save" }</button>
                    <button onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel" }</button>
                </section>
            };
        }

        html! {
            <section class="organization-profile">
                <h1>{ profile.name.clone() }</h1>
                <p style="color:#6b7280;">{ format!("{} · {}", profile.category, profile.email) }</p>
                <p>{ profile.description.clone() }</p>
                <p>{ format!("Location: {}", profile.location) }</p>
                if let Some(website) = &profile.website {
                    <p>{ format!("Website: {website}") }</p>
                }
                if let Some(phone) = &profile.phone {
                    <p>{ format!("Phone: {phone}") }</p>
                }
                <button onclick={link.callback(|_| Msg::StartEdit)}>{ "Edit profile" }</button>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> OrganizationProfile {
        OrganizationProfile {
            name: "Food Bank".to_string(),
            location: "Downtown".to_string(),
            website: Some("https://food.example".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unchanged_draft_sends_nothing() {
        assert_eq!(diff(&profile(), &profile()), OrganizationProfileUpdate::default());
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let mut draft = profile();
        draft.location = " Uptown ".to_string();
        draft.website = Some(String::new());
        let update = diff(&profile(), &draft);
        assert_eq!(update.location.as_deref(), Some("Uptown"));
        assert_eq!(update.website.as_deref(), Some(""));
        assert_eq!(update.name, None);
    }
}
