use common::session::{Role, Session};
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html};

use crate::components::community::CommunityPage;
use crate::components::home::HomePage;
use crate::components::leaderboard::LeaderboardPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::organization_dashboard::OrganizationDashboard;
use crate::components::organization_profile::OrganizationProfilePage;
use crate::components::profile::ProfilePage;
use crate::components::signup::SignupPage;
use crate::components::volunteer_dashboard::VolunteerDashboard;
use crate::context::ClientHandle;

/// Screens of the application. The active one lives in [`App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login(Role),
    Signup(Role),
    VolunteerDashboard,
    OrganizationDashboard,
    Leaderboard,
    Community,
    Profile,
    OrganizationProfile,
}

impl Page {
    /// Pages that call authenticated endpoints.
    pub fn requires_session(self) -> bool {
        !matches!(
            self,
            Page::Home | Page::Login(_) | Page::Signup(_) | Page::Leaderboard
        )
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            Page::VolunteerDashboard | Page::Profile => Some(Role::Volunteer),
            Page::OrganizationDashboard | Page::OrganizationProfile => Some(Role::Organization),
            _ => None,
        }
    }

    pub fn dashboard(role: Role) -> Page {
        match role {
            Role::Volunteer => Page::VolunteerDashboard,
            Role::Organization => Page::OrganizationDashboard,
        }
    }
}

pub enum Msg {
    Navigate(Page),
    SignedIn(Role),
    Logout,
    LoggedOut,
    AuthLost,
}

pub struct App {
    client: ClientHandle,
    page: Page,
    session: Option<Session>,
}

impl App {
    /// Redirects pages the current session may not open.
    fn resolve(&self, page: Page) -> Page {
        if !page.requires_session() {
            return page;
        }
        let Some(session) = &self.session else {
            return Page::Login(page.required_role().unwrap_or(Role::Volunteer));
        };
        match (page.required_role(), session.role) {
            (Some(required), Some(role)) if required != role => Page::dashboard(role),
            _ => page,
        }
    }

    fn refresh_session(&mut self) {
        self.session = self.client.session().session();
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let client = ClientHandle::new();
        let session = client.session().session();
        let page = match session.as_ref().and_then(|s| s.role) {
            Some(role) => Page::dashboard(role),
            None => Page::Home,
        };
        Self {
            client,
            page,
            session,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                self.refresh_session();
                let page = self.resolve(page);
                log::debug!("navigate to {page:?}");
                self.page = page;
                true
            }
            Msg::SignedIn(role) => {
                self.refresh_session();
                self.page = Page::dashboard(role);
                true
            }
            Msg::Logout => {
                let client = self.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    client.logout().await;
                    link.send_message(Msg::LoggedOut);
                });
                false
            }
            Msg::LoggedOut => {
                self.session = None;
                self.page = Page::Home;
                true
            }
            Msg::AuthLost => {
                let role = self
                    .session
                    .as_ref()
                    .and_then(|s| s.role)
                    .unwrap_or(Role::Volunteer);
                log::info!("session expired, back to {role} login");
                self.refresh_session();
                self.page = Page::Login(role);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate: Callback<Page> = link.callback(Msg::Navigate);
        let on_auth_lost: Callback<()> = link.callback(|_| Msg::AuthLost);
        let on_signed_in: Callback<Role> = link.callback(Msg::SignedIn);
        let client = self.client.clone();

        let page = match self.page {
            Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
            Page::Login(role) => html! {
                <LoginPage {role} {client} on_signed_in={on_signed_in} on_navigate={on_navigate.clone()} />
            },
            Page::Signup(role) => html! {
                <SignupPage {role} {client} on_signed_in={on_signed_in} on_navigate={on_navigate.clone()} />
            },
            Page::VolunteerDashboard => html! {
                <VolunteerDashboard {client} on_auth_lost={on_auth_lost} />
            },
            Page::OrganizationDashboard => html! {
                <OrganizationDashboard {client} on_auth_lost={on_auth_lost} />
            },
            Page::Leaderboard => html! { <LeaderboardPage {client} /> },
            Page::Community => html! {
                <CommunityPage {client} on_auth_lost={on_auth_lost} />
            },
            Page::Profile => html! {
                <ProfilePage {client} on_auth_lost={on_auth_lost} />
            },
            Page::OrganizationProfile => html! {
                <OrganizationProfilePage {client} on_auth_lost={on_auth_lost} />
            },
        };

        html! {
            <div class="app-root">
                <Navbar
                    session={self.session.clone()}
                    current={self.page}
                    on_navigate={on_navigate}
                    on_logout={link.callback(|_| Msg::Logout)}
                />
                <main style="max-width:1100px;margin:0 auto;padding:24px;">
                    { page }
                </main>
            </div>
        }
    }
}
