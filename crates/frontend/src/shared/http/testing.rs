//! Scripted transport for lifecycle tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use super::client::HttpResourceClient;
use super::failure::HttpFailure;
use super::request::{OutgoingRequest, RawResponse};
use super::transport::Transport;
use crate::system::auth::session::StaticSession;

struct Scripted {
    /// Only requests whose URL contains this match; `None` matches anything
    url_contains: Option<String>,
    reply: Result<RawResponse, HttpFailure>,
}

/// Records every request and answers from a script.
/// Each call yields to the executor once before answering, so overlapping
/// operations can observe each other's in-flight state.
#[derive(Default)]
pub struct MockTransport {
    calls: RefCell<Vec<OutgoingRequest>>,
    script: RefCell<Vec<Scripted>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply_json(&self, status: u16, body: Value) {
        self.reply_raw(status, &body.to_string());
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.push(None, Ok(RawResponse::new(status, body)));
    }

    pub fn reply_json_for(&self, url_contains: &str, status: u16, body: Value) {
        self.push(
            Some(url_contains.to_string()),
            Ok(RawResponse::new(status, body.to_string())),
        );
    }

    pub fn fail_network(&self) {
        self.push(None, Err(HttpFailure::network("connection refused")));
    }

    fn push(&self, url_contains: Option<String>, reply: Result<RawResponse, HttpFailure>) {
        self.script.borrow_mut().push(Scripted { url_contains, reply });
    }

    pub fn calls(&self) -> Vec<OutgoingRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, HttpFailure> {
        // replies are bound in call order, whatever order the callers resume in
        let reply = self.take_reply(&request.url);
        self.calls.borrow_mut().push(request);

        tokio::task::yield_now().await;
        reply
    }
}

impl MockTransport {
    fn take_reply(&self, url: &str) -> Result<RawResponse, HttpFailure> {
        let mut script = self.script.borrow_mut();
        let position = script.iter().position(|entry| {
            entry
                .url_contains
                .as_deref()
                .map_or(true, |needle| url.contains(needle))
        });
        match position {
            Some(index) => script.remove(index).reply,
            None => Err(HttpFailure::network(format!("no scripted reply for {url}"))),
        }
    }
}

pub fn client_with(transport: &Rc<MockTransport>, token: Option<&str>) -> HttpResourceClient {
    HttpResourceClient::new(
        "http://api.test",
        Rc::new(StaticSession::new(token.map(str::to_string))),
        transport.clone(),
    )
}
