use common::error::ApiError;
use common::model::profile::{Profile, ProfileUpdate};
use common::model::split_list;
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice};

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub client: ClientHandle,
    pub on_auth_lost: Callback<()>,
}

pub enum Msg {
    Loaded(Result<Profile, ApiError>),
    StartEdit,
    CancelEdit,
    SetLocation(String),
    SetSkills(String),
    Save,
    Saved(Result<Option<Profile>, ApiError>),
}

pub struct ProfilePage {
    profile: Option<Profile>,
    editing: bool,
    location: String,
    skills: String,
}

impl ProfilePage {
    fn fail(ctx: &Context<Self>, err: &ApiError, prefix: &str) {
        log::warn!("{prefix}: {err}");
        show_notice(&Notice::error(format!("{prefix}: {}", err.user_message())));
        if err.requires_login() {
            ctx.props().on_auth_lost.emit(());
        }
    }

    /// Only the fields that differ from the loaded profile are sent.
    fn changes(&self) -> ProfileUpdate {
        let Some(profile) = &self.profile else {
            return ProfileUpdate::default();
        };
        let location = self.location.trim();
        let skills = split_list(&self.skills);
        ProfileUpdate {
            location: (location != profile.location).then(|| location.to_string()),
            skills: (skills != profile.skills).then_some(skills),
        }
    }
}

impl Component for ProfilePage {
    type Message = Msg;
    type Properties = ProfileProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(client.profile().await));
        });
        Self {
            profile: None,
            editing: false,
            location: String::new(),
            skills: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Saved(Ok(None)) => {
                if let Some(profile) = &mut self.profile {
                    profile.location = self.location.trim().to_string();
                    profile.skills = split_list(&self.skills);
                }
                self.editing = false;
                show_notice(&Notice::success("Profile updated"));
                true
            }
            Msg::Loaded(Ok(profile)) | Msg::Saved(Ok(Some(profile))) => {
                if self.editing {
                    show_notice(&Notice::success("Profile updated"));
                }
                self.location = profile.location.clone();
                self.skills = profile.skills.join(", ");
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
                    self.location = profile.location.clone();
                    self.skills = profile.skills.join(", ");
                }
                self.editing = false;
                true
            }
            Msg::SetLocation(location) => {
                self.location = location;
                true
            }
            Msg::SetSkills(skills) => {
                self.skills = skills;
                true
            }
            Msg::Save => {
                let update = self.changes();
                if update.is_empty() {
                    self.editing = false;
                    return true;
                }
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Saved(client.update_profile(&update).await));
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

        let details = if self.editing {
            html! {
                <div>
                    <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                        { "Location" }
                        <input
                            type="text"
                            value={self.location.clone()}
                            oninput={link.callback(|e| Msg::SetLocation(input_value(e)))}
                        />
                    </label>
                    <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                        { "Skills (comma separated)" }
                        <input
                            type="text"
                            value={self.skills.clone()}
                            oninput={link.callback(|e| Msg::SetSkills(input_value(e)))}
                        />
                    </label>
                    <button onclick={link.callback(|_| Msg::Save)}>{ "Save" }</button>
                    <button onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel" }</button>
                </div>
            }
        } else {
            html! {
                <div>
                    <p>{ format!("Location: {}", profile.location) }</p>
                    <p>{ format!("Skills: {}", profile.skills.join(", ")) }</p>
                    <button onclick={link.callback(|_| Msg::StartEdit)}>{ "Edit profile" }</button>
                </div>
            }
        };

        html! {
            <section class="profile">
                <h1>{ profile.full_name() }</h1>
                <p style="color:#6b7280;">
                    { format!("{} · member since {}", profile.user.email, profile.join_date) }
                </p>
                <p>{ format!("Total hours: {:.1}", profile.total_hours) }</p>
                { details }
                if !profile.badges.is_empty() {
                    <h2>{ "Badges" }</h2>
                    <div style="display:flex;gap:8px;">
                        { for profile.badges.iter().map(|badge| html! {
                            <span style="padding:4px 10px;border-radius:999px;background:#fef3c7;">{ badge.clone() }</span>
                        }) }
                    </div>
                }
                <h2>{ "Recent activity" }</h2>
                if profile.activities.is_empty() {
                    <p>{ "No activities yet." }</p>
                } else {
                    <ul>
                        { for profile.activities.iter().map(|activity| html! {
                            <li key={activity.id.to_string()}>
                                { format!("{} · {} · {:.1}h", activity.title, activity.date, activity.hours) }
                            </li>
                        }) }
                    </ul>
                }
            </section>
        }
    }
}
