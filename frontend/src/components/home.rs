use common::session::Role;
use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let nav = &ctx.props().on_navigate;
        let card = "flex:1;padding:24px;border-radius:12px;background:#f3f4f6;";

        html! {
            <section>
                <h1>{ "Make a difference in your community" }</h1>
                <p>{ "Find volunteering opportunities near you, or recruit volunteers for your organization." }</p>
                <div style="display:flex;gap:24px;margin-top:24px;">
                    <div style={card}>
                        <h2>{ "Volunteers" }</h2>
                        <button onclick={nav.reform(|_: MouseEvent| Page::Signup(Role::Volunteer))}>
                            { "Join as a volunteer" }
                        </button>
                        <button onclick={nav.reform(|_: MouseEvent| Page::Login(Role::Volunteer))}>
                            { "Volunteer login" }
                        </button>
                    </div>
                    <div style={card}>
                        <h2>{ "Organizations" }</h2>
                        <button onclick={nav.reform(|_: MouseEvent| Page::Signup(Role::Organization))}>
                            { "Register your organization" }
                        </button>
                        <button onclick={nav.reform(|_: MouseEvent| Page::Login(Role::Organization))}>
                            { "Organization login" }
                        </button>
                    </div>
                </div>
                <p style="margin-top:24px;">
                    <button onclick={nav.reform(|_: MouseEvent| Page::Leaderboard)}>
                        { "See the top volunteers" }
                    </button>
                </p>
            </section>
        }
    }
}
