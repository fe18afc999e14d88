use contracts::shared::{Entity, ResourceDescriptor};
use serde_json::Value;
use std::rc::Rc;

use super::failure::{server_message, HttpFailure};
use super::request::{ApiRequest, HttpMethod, OutgoingRequest, RequestBody};
use super::transport::Transport;
use crate::system::auth::session::SessionStore;

/// Authenticated access to `{api_base}/api/...`.
///
/// Never panics and never retries: every problem comes back as [`HttpFailure`].
/// Holds no mutable state, so clones are cheap and interchangeable.
#[derive(Clone)]
pub struct HttpResourceClient {
    api_base: String,
    session: Rc<dyn SessionStore>,
    transport: Rc<dyn Transport>,
}

impl HttpResourceClient {
    pub fn new(
        api_base: impl Into<String>,
        session: Rc<dyn SessionStore>,
        transport: Rc<dyn Transport>,
    ) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            session,
            transport,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `request(method, path, body)`; decoded JSON body, `Value::Null` when empty
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, HttpFailure> {
        self.send(ApiRequest::new(method, path, body)).await
    }

    pub async fn send(&self, request: ApiRequest) -> Result<Value, HttpFailure> {
        let bearer = if request.needs_token() {
            match self.session.token() {
                Some(token) => Some(token),
                None => {
                    log::warn!("{} {} refused: no session token", request.method, request.path);
                    return Err(HttpFailure::unauthorized());
                }
            }
        } else {
            None
        };

        let outgoing = OutgoingRequest {
            method: request.method,
            url: self.url(&request.path),
            bearer,
            body: request.body,
        };
        log::debug!("{} {}", outgoing.method, outgoing.url);

        let response = self.transport.send(outgoing).await?;
        if !response.is_success() {
            log::warn!("{} {} -> HTTP {}", request.method, request.path, response.status);
            return Err(HttpFailure::from_status(
                response.status,
                server_message(&response.body),
            ));
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(HttpFailure::decode)
    }

    /// Whole collection, whatever envelope the backend uses
    pub async fn fetch_many(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<Entity>, HttpFailure> {
        let body = self.request(HttpMethod::Get, descriptor.path, RequestBody::Empty).await?;
        descriptor.decode_many(body).map_err(HttpFailure::decode)
    }

    /// One record at `path`
    pub async fn fetch_one(
        &self,
        descriptor: &ResourceDescriptor,
        path: &str,
    ) -> Result<Entity, HttpFailure> {
        let body = self.request(HttpMethod::Get, path, RequestBody::Empty).await?;
        descriptor.decode_one(body).map_err(HttpFailure::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{client_with, MockTransport};
    use crate::shared::http::GENERIC_FAILURE_MESSAGE;
    use contracts::domain::a001_product;
    use serde_json::json;

    #[tokio::test]
    async fn test_mutating_call_carries_bearer_token() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"ok": true}));
        let client = client_with(&transport, Some("abc"));

        let result = client
            .request(HttpMethod::Put, "/api/contact-us/site-info", RequestBody::Json(json!({})))
            .await;

        assert!(result.is_ok());
        let calls = transport.calls();
        assert_eq!(calls[0].bearer.as_deref(), Some("abc"));
        assert_eq!(calls[0].url, "http://api.test/api/contact-us/site-info");
    }

    #[tokio::test]
    async fn test_public_get_is_anonymous() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([]));
        let client = client_with(&transport, Some("abc"));

        client.request(HttpMethod::Get, "/api/products", RequestBody::Empty).await.unwrap();
        assert_eq!(transport.calls()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_mutation_without_token_never_reaches_network() {
        let transport = MockTransport::new();
        let client = client_with(&transport, None);

        let failure = client
            .request(HttpMethod::Delete, "/api/products/1", RequestBody::Empty)
            .await
            .unwrap_err();

        assert!(failure.is_unauthorized());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message_or_generic() {
        let transport = MockTransport::new();
        transport.reply_json(400, json!({"message": "Name is taken"}));
        transport.reply_raw(500, "");
        let client = client_with(&transport, Some("t"));

        let first = client
            .request(HttpMethod::Post, "/api/products", RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(first, HttpFailure::from_status(400, Some("Name is taken".into())));

        let second = client
            .request(HttpMethod::Post, "/api/products", RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(second.status, Some(500));
        assert_eq!(second.message, GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_failure() {
        let transport = MockTransport::new();
        transport.reply_raw(200, "<html>");
        let client = client_with(&transport, None);

        let failure = client
            .request(HttpMethod::Get, "/api/events", RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(failure.status, None);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = MockTransport::new();
        transport.reply_raw(204, "");
        let client = client_with(&transport, Some("t"));

        let value = client
            .request(HttpMethod::Delete, "/api/events/1", RequestBody::Empty)
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_many_normalizes_envelope() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"products": [{"_id": "1", "name": "Anise"}]}));
        let client = client_with(&transport, None);

        let products = client.fetch_many(&a001_product::descriptor()).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].text("name"), "Anise");
    }
}
