use common::error::ApiError;
use common::model::auth::Credentials;
use common::notice::Notice;
use common::session::Role;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub role: Role,
    pub client: ClientHandle,
    pub on_signed_in: Callback<Role>,
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<(), ApiError>),
}

pub struct LoginPage {
    email: String,
    password: String,
    submitting: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                true
            }
            Msg::SetPassword(password) => {
                self.password = password;
                true
            }
            Msg::Submit => {
                if self.email.trim().is_empty() || self.password.is_empty() {
                    show_notice(&Notice::error("Email and password are required"));
                    return false;
                }
                self.submitting = true;
                let credentials = Credentials {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                let role = ctx.props().role;
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match role {
                        Role::Volunteer => client.login(&credentials).await,
                        Role::Organization => client.login_organization(&credentials).await,
                    };
                    link.send_message(Msg::Done(result.map(|_| ())));
                });
                true
            }
            Msg::Done(Ok(())) => {
                self.submitting = false;
                show_notice(&Notice::success("Welcome back!"));
                ctx.props().on_signed_in.emit(ctx.props().role);
                true
            }
            Msg::Done(Err(err)) => {
                self.submitting = false;
                log::warn!("login failed: {err}");
                show_notice(&Notice::error(err.user_message()));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let (title, other) = match props.role {
            Role::Volunteer => ("Volunteer login", Role::Organization),
            Role::Organization => ("Organization login", Role::Volunteer),
        };
        let role = props.role;

        html! {
            <section style="max-width:420px;margin:0 auto;">
                <h1>{ title }</h1>
                <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                        { "Email" }
                        <input
                            type="email"
                            value={self.email.clone()}
                            oninput={link.callback(|e| Msg::SetEmail(input_value(e)))}
                        />
                    </label>
                    <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                        { "Password" }
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e| Msg::SetPassword(input_value(e)))}
                        />
                    </label>
                    <button type="submit" disabled={self.submitting}>
                        { if self.submitting { "Signing in..." } else { "Log in" } }
                    </button>
                </form>
                <p>
                    <button onclick={props.on_navigate.reform(move |_: MouseEvent| Page::Signup(role))}>
                        { "Create an account" }
                    </button>
                    <button onclick={props.on_navigate.reform(move |_: MouseEvent| Page::Login(other))}>
                        { format!("Log in as {other}") }
                    </button>
                </p>
            </section>
        }
    }
}
