use common::error::ApiError;
use common::model::leaderboard::LeaderboardEntry;
use common::notice::Notice;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::ClientHandle;
use crate::helpers::show_notice;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub client: ClientHandle,
}

pub enum Msg {
    Loaded(Result<Vec<LeaderboardEntry>, ApiError>),
}

pub struct LeaderboardPage {
    entries: Vec<LeaderboardEntry>,
    loading: bool,
}

impl Component for LeaderboardPage {
    type Message = Msg;
    type Properties = LeaderboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(client.leaderboard().await));
        });
        Self {
            entries: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(entries)) => {
                self.entries = entries;
            }
            Msg::Loaded(Err(err)) => {
                log::warn!("loading leaderboard failed: {err}");
                show_notice(&Notice::error("Failed to load leaderboard"));
            }
        }
        self.loading = false;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let rows = self.entries.iter().map(|entry| {
            html! {
                <tr key={entry.id.to_string()}>
                    <td>{ entry.rank.map(|rank| format!("#{rank}")).unwrap_or_default() }</td>
                    <td>{ entry.name.clone() }</td>
                    <td>{ format!("{:.1}", entry.hours) }</td>
                    <td>{ entry.tasks.to_string() }</td>
                    <td>{ format!("{:.1}", entry.rating) }</td>
                </tr>
            }
        });

        html! {
            <section>
                <h1>{ "Top volunteers" }</h1>
                if self.loading {
                    <p>{ "Loading..." }</p>
                } else {
                    <table style="width:100%;border-collapse:collapse;">
                        <thead>
                            <tr>
                                <th>{ "Rank" }</th>
                                <th>{ "Volunteer" }</th>
                                <th>{ "Hours" }</th>
                                <th>{ "Tasks" }</th>
                                <th>{ "Rating" }</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                }
            </section>
        }
    }
}
