use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{ApiRequest, HttpResourceClient, RequestBody};

pub const LOGIN_PATH: &str = "/api/admin/login";

/// Login with username and password; returns the bearer token
pub async fn login(
    client: &HttpResourceClient,
    username: String,
    password: String,
) -> Result<String, String> {
    let request = LoginRequest { username, password };
    request.validate()?;

    let body = serde_json::to_value(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let value = client
        .send(ApiRequest::post(LOGIN_PATH, RequestBody::Json(body)).anonymous())
        .await
        .map_err(|failure| failure.message)?;

    let response: LoginResponse = serde_json::from_value(value)
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    match response.token.filter(|token| !token.trim().is_empty()) {
        Some(token) => Ok(token),
        None => Err(response
            .message
            .unwrap_or_else(|| "Login failed: no token received".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{client_with, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_returns_token_without_sending_one() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"token": "jwt-1"}));
        let client = client_with(&transport, Some("stale"));

        let token = login(&client, "admin".into(), "secret".into()).await;

        assert_eq!(token.as_deref(), Ok("jwt-1"));
        let calls = transport.calls();
        assert_eq!(calls[0].url, "http://api.test/api/admin/login");
        assert_eq!(calls[0].bearer, None);
    }

    #[tokio::test]
    async fn test_missing_credentials_never_reach_network() {
        let transport = MockTransport::new();
        let client = client_with(&transport, None);

        let result = login(&client, "admin".into(), String::new()).await;

        assert_eq!(
            result,
            Err("Please enter both username and password".to_string())
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_message() {
        let transport = MockTransport::new();
        transport.reply_json(401, json!({"message": "Invalid credentials"}));
        let client = client_with(&transport, None);

        let result = login(&client, "admin".into(), "wrong".into()).await;
        assert_eq!(result, Err("Invalid credentials".to_string()));
    }
}
