use common::session::{Role, Session};
use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub session: Option<Session>,
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

pub struct Navbar;

impl Navbar {
    fn link(label: &str, page: Page, props: &NavbarProps) -> Html {
        let active = props.current == page;
        let style = if active {
            "background:none;border:none;color:#60a5fa;font-weight:600;cursor:pointer;"
        } else {
            "background:none;border:none;color:#e5e7eb;cursor:pointer;"
        };
        let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
        html! {
            <button {onclick} {style}>{ label.to_string() }</button>
        }
    }
}

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let role = props.session.as_ref().and_then(|s| s.role);

        let links = match (&props.session, role) {
            (None, _) => html! {
                <>
                    { Self::link("Leaderboard", Page::Leaderboard, props) }
                    { Self::link("Log in", Page::Login(Role::Volunteer), props) }
                    { Self::link("Sign up", Page::Signup(Role::Volunteer), props) }
                </>
            },
            (Some(_), Some(Role::Organization)) => html! {
                <>
                    { Self::link("Dashboard", Page::OrganizationDashboard, props) }
                    { Self::link("Community", Page::Community, props) }
                    { Self::link("Leaderboard", Page::Leaderboard, props) }
                    { Self::link("Profile", Page::OrganizationProfile, props) }
                </>
            },
            (Some(_), _) => html! {
                <>
                    { Self::link("Opportunities", Page::VolunteerDashboard, props) }
                    { Self::link("Community", Page::Community, props) }
                    { Self::link("Leaderboard", Page::Leaderboard, props) }
                    { Self::link("Profile", Page::Profile, props) }
                </>
            },
        };

        let logout = if props.session.is_some() {
            let onclick = props.on_logout.reform(|_: MouseEvent| ());
            html! {
                <button {onclick} style="background:#374151;border:none;color:#f9fafb;padding:6px 12px;border-radius:6px;cursor:pointer;">
                    { "Log out" }
                </button>
            }
        } else {
            html! {}
        };

        html! {
            <nav style="display:flex;align-items:center;gap:16px;padding:12px 24px;background:#111827;">
                <button
                    onclick={props.on_navigate.reform(|_: MouseEvent| Page::Home)}
                    style="background:none;border:none;color:#f9fafb;font-size:1.25rem;font-weight:700;cursor:pointer;"
                >
                    { "Volunteer Hub" }
                </button>
                <div style="display:flex;gap:12px;flex:1;">{ links }</div>
                { logout }
            </nav>
        }
    }
}
