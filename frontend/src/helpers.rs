//! Small UI utilities shared by the pages.
//!
//! - **User Feedback**: [`show_notice`] renders a `Notice` from the common
//!   crate as a toast that removes itself after `NOTICE_TIMEOUT_MS`.
//! - **Form input**: [`input_value`] and [`textarea_value`] read the current
//!   value out of an `InputEvent`.

use common::notice::{NOTICE_TIMEOUT_MS, Notice, NoticeKind};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Displays a temporary notification in the top right corner.
///
/// The message is set as text, never as HTML: server error bodies are shown
/// verbatim and must not be interpreted.
pub fn show_notice(notice: &Notice) {
    let background = match notice.kind {
        NoticeKind::Success => "#16a34a",
        NoticeKind::Info => "#2563eb",
        NoticeKind::Error => "#dc2626",
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(&notice.message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "16px").ok();
        style.set_property("right", "16px").ok();
        style.set_property("background", background).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "12px 16px").ok();
        style.set_property("border-radius", "8px").ok();
        style.set_property("box-shadow", "0 4px 12px rgba(0,0,0,0.25)").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("max-width", "360px").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

pub fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: InputEvent) -> String {
    let input: HtmlTextAreaElement = e.target_unchecked_into();
    input.value()
}

