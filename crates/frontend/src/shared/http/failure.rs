use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

/// Shown whenever the server gives no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Any failed request: non-2xx, network error, timeout or undecodable body.
/// `status` is `None` when no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl HttpFailure {
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: server_message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn network(detail: impl Display) -> Self {
        log::warn!("network failure: {}", detail);
        Self::generic()
    }

    pub fn timeout(after_ms: u32) -> Self {
        log::warn!("request timed out after {} ms", after_ms);
        Self::generic()
    }

    pub fn decode(detail: impl Display) -> Self {
        log::warn!("failed to decode response: {}", detail);
        Self::generic()
    }

    pub fn unauthorized() -> Self {
        Self {
            status: Some(401),
            message: "Not authenticated. Please log in again.".to_string(),
        }
    }

    fn generic() -> Self {
        Self {
            status: None,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// 404/410: the target no longer exists on the server
    pub fn is_gone(&self) -> bool {
        matches!(self.status, Some(404) | Some(410))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// `message` (or `error`) of a JSON error body, if any
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(r#"{"message":"Name already taken"}"#).as_deref(),
            Some("Name already taken")
        );
        assert_eq!(server_message(r#"{"error":"Bad id"}"#).as_deref(), Some("Bad id"));
        assert_eq!(server_message(r#"{"message":"  "}"#), None);
        assert_eq!(server_message("<html>502</html>"), None);
    }

    #[test]
    fn test_status_without_message_is_generic() {
        let failure = HttpFailure::from_status(500, None);
        assert_eq!(failure.status, Some(500));
        assert_eq!(failure.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_gone() {
        assert!(HttpFailure::from_status(404, None).is_gone());
        assert!(HttpFailure::from_status(410, None).is_gone());
        assert!(!HttpFailure::from_status(400, None).is_gone());
        assert!(!HttpFailure::network("offline").is_gone());
    }
}
