//! Properties for the `VolunteerDashboard`.

use yew::prelude::*;

use crate::context::ClientHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct VolunteerDashboardProps {
    pub client: ClientHandle,
    /// Emitted when a request came back 401 and the session is gone.
    pub on_auth_lost: Callback<()>,
}
