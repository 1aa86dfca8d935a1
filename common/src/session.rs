//! Client-held credentials and the role of the signed-in user.
//!
//! The session lives in a small key-value store (`localStorage` in the
//! browser) under three keys. [`SessionContext`] is the only thing that
//! writes them, through [`SessionContext::set_session`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_TYPE_KEY: &str = "userType";

/// Account type of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Volunteer,
    Organization,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "volunteer",
            Role::Organization => "organization",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volunteer" => Ok(Role::Volunteer),
            "organization" => Ok(Role::Organization),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Credentials of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token sent in the `Authorization` header.
    pub access_token: String,
    /// Sent to the logout endpoint so the server can revoke it.
    pub refresh_token: Option<String>,
    /// `None` when the stored role tag is missing or unrecognised.
    pub role: Option<Role>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>, role: Role) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            role: Some(role),
        }
    }
}

/// Process-local persistent key-value storage.
///
/// Methods take `&self`: the browser storage is a handle to shared state and
/// storage failures (quota, private mode) are not recoverable by the caller.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Session accessor injected into every component that needs to know who is
/// signed in.
#[derive(Debug, Default)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current session, or `None` when no access token is stored.
    pub fn session(&self) -> Option<Session> {
        let access_token = self.store.get(AUTH_TOKEN_KEY)?;
        Some(Session {
            access_token,
            refresh_token: self.store.get(REFRESH_TOKEN_KEY),
            role: self
                .store
                .get(USER_TYPE_KEY)
                .and_then(|tag| tag.parse().ok()),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get(AUTH_TOKEN_KEY).is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    pub fn role(&self) -> Option<Role> {
        self.session().and_then(|session| session.role)
    }

    /// Replaces the stored session. `None` clears all three keys.
    pub fn set_session(&self, session: Option<Session>) {
        match session {
            Some(session) => {
                self.store.set(AUTH_TOKEN_KEY, &session.access_token);
                match &session.refresh_token {
                    Some(refresh) => self.store.set(REFRESH_TOKEN_KEY, refresh),
                    None => self.store.remove(REFRESH_TOKEN_KEY),
                }
                match session.role {
                    Some(role) => self.store.set(USER_TYPE_KEY, role.as_str()),
                    None => self.store.remove(USER_TYPE_KEY),
                }
                log::debug!("session stored for role {:?}", session.role);
            }
            None => {
                self.store.remove(AUTH_TOKEN_KEY);
                self.store.remove(REFRESH_TOKEN_KEY);
                self.store.remove(USER_TYPE_KEY);
                log::debug!("session cleared");
            }
        }
    }

    pub fn clear(&self) {
        self.set_session(None);
    }
}
