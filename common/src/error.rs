//! Error type shared by the API client and the view-models.

/// Everything a call against the remote API can fail with.
///
/// The variants follow how the UI reacts to them:
/// - `Unauthorized`: credentials were already cleared by the client; the
///   frontend sends the user back to the login page.
/// - `Rejected`: any other non-2xx answer. A 4xx body is a validation or
///   business message and is shown as-is; 5xx pages are not.
/// - `Network`, `Decode`, `Encode`: reported with a generic message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized: session expired or invalid")]
    Unauthorized,

    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    WrongRole(String),
}

impl ApiError {
    /// Text shown to the user in a notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized | ApiError::NotAuthenticated => {
                "Please log in to continue".to_string()
            }
            ApiError::Rejected { status: 400..=499, body } if !body.trim().is_empty() => {
                body.clone()
            }
            ApiError::WrongRole(message) => message.clone(),
            ApiError::Rejected { .. }
            | ApiError::Network(_)
            | ApiError::Decode(_)
            | ApiError::Encode(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Whether the UI should route the user to the login page.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }
}
