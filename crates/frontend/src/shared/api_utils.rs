//! API utilities for frontend-backend communication
//!
//! Resolves the backend address and builds the shared HTTP client.

use std::rc::Rc;

use crate::shared::config::AppConfig;
use crate::shared::http::{FetchTransport, HttpResourceClient};
use crate::system::auth::session::BrowserSession;

/// Get the base URL derived from the window location
///
/// Uses port 3000 for the backend server, e.g. "http://localhost:3000".
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Configured base URL, or the one derived from the window
pub fn resolve_api_base(config: &AppConfig) -> String {
    let configured = config.api.base_url.trim();
    if configured.is_empty() {
        api_base()
    } else {
        configured.trim_end_matches('/').to_string()
    }
}

/// Client reading the token from `localStorage` and talking over `fetch`
pub fn api_client(config: &AppConfig) -> HttpResourceClient {
    HttpResourceClient::new(
        resolve_api_base(config),
        Rc::new(BrowserSession),
        Rc::new(FetchTransport::new(config.api.request_timeout_ms)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.salvia.example/".into();
        assert_eq!(resolve_api_base(&config), "https://api.salvia.example");
    }
}
