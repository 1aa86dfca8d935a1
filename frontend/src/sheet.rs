//! Modal top sheet used for forms and detail panels.

use yew::{html, Callback, Component, Context, Html, Properties};

pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        TopSheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_close = props.on_close.reform(|_| ());
        html! {
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:flex-start;justify-content:center;">
                <div class="top-sheet show" style="margin-top:48px;width:min(640px,92vw);background:#1f2937;color:#f9fafb;border-radius:12px;box-shadow:0 12px 32px rgba(0,0,0,0.4);">
                    <div style="display:flex;justify-content:space-between;align-items:center;padding:16px 24px;border-bottom:1px solid #374151;">
                        <h2 style="margin:0;font-size:1.25rem;">{ props.title.clone() }</h2>
                        <button onclick={on_close} style="background:none;border:none;color:#9ca3af;font-size:1.5rem;cursor:pointer;">
                            { "✕" }
                        </button>
                    </div>
                    <div style="padding:24px;">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
