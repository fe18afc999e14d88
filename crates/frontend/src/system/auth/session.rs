//! Read-only view of the session credential.
//!
//! Controllers and the HTTP client receive a `SessionStore` instead of
//! reading `localStorage` themselves; only the login flow writes the token.

use std::cell::RefCell;

use super::storage;

pub trait SessionStore {
    fn token(&self) -> Option<String>;
}

/// Token kept by the browser (`localStorage["token"]`)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        storage::get_token()
    }
}

/// In-memory session, for tests and previews
#[derive(Debug, Default)]
pub struct StaticSession {
    token: RefCell<Option<String>>,
}

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RefCell::new(token),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }
}

impl SessionStore for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}
