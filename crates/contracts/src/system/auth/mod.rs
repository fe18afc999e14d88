use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/admin/login` answers `{ token }` on success and `{ message }` otherwise
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginRequest {
    /// Both credentials must be present before the request is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter both username and password".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_credentials() {
        let request = LoginRequest {
            username: "  ".into(),
            password: "secret".into(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_without_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }
}
