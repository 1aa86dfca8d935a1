//! Volunteer dashboard: the opportunity list with its filter form and the
//! apply/withdraw buttons.
//!
//! The `Component` implementation delegates to `update::update` and
//! `view::view`; the first render triggers the initial load.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::VolunteerDashboardProps;
pub use state::VolunteerDashboard;

impl Component for VolunteerDashboard {
    type Message = Msg;
    type Properties = VolunteerDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        VolunteerDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
