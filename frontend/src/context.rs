//! The API client shared by every page.
//!
//! One client exists per page load. It owns the session context, so handing
//! the same [`ClientHandle`] to every component is how they all see the same
//! credentials; `SessionContext::set_session` stays the only writer.

use std::ops::Deref;
use std::rc::Rc;

use common::api::ApiClient;
use common::config::ApiConfig;

use crate::http::GlooTransport;
use crate::storage::BrowserStorage;

pub type Client = ApiClient<GlooTransport, BrowserStorage>;

#[derive(Clone)]
pub struct ClientHandle(Rc<Client>);

impl ClientHandle {
    pub fn new() -> Self {
        Self(Rc::new(ApiClient::new(
            ApiConfig::from_env(),
            GlooTransport,
            BrowserStorage,
        )))
    }
}

impl Deref for ClientHandle {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Yew compares props to decide re-renders; two handles are equal when they
/// point at the same client.
impl PartialEq for ClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
