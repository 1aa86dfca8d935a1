//! Recording transport shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use common::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use common::config::ApiConfig;
use common::error::ApiError;
use common::session::{MemoryStore, Role, Session};

pub const BASE_URL: &str = "https://volunteer.test";

/// Plays back queued answers in order and keeps every request it was given.
#[derive(Default)]
pub struct MockTransport {
    answers: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.answers.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.answers
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// `"METHOD /path"` of every request, base URL stripped.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| {
                format!(
                    "{} {}",
                    request.method,
                    request.url.trim_start_matches(BASE_URL)
                )
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no answer queued".to_string())))
    }
}

pub type TestClient = ApiClient<MockTransport, MemoryStore>;

pub fn client() -> TestClient {
    ApiClient::new(
        ApiConfig::new(BASE_URL),
        MockTransport::default(),
        MemoryStore::new(),
    )
}

pub fn signed_in(role: Role) -> TestClient {
    let client = client();
    client.session().set_session(Some(Session::new(
        "access-token",
        Some("refresh-token".to_string()),
        role,
    )));
    client
}

pub fn opportunity_json(id: u64, needed: u32, registered: u32, applied: bool) -> String {
    format!(
        r#"{{
            "id": {id},
            "title": "Opportunity {id}",
            "description": "",
            "date": "2024-06-01",
            "location": "Oakland",
            "volunteers_needed": {needed},
            "volunteers_registered": {registered},
            "skills_required": ["teaching"],
            "created_at": "2024-05-01T09:00:00Z",
            "organization": {{"id": 1, "name": "Food Bank"}},
            "applied": {applied}
        }}"#
    )
}

pub fn list_json(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}
