//! HTTP access to the site backend.
//!
//! - request.rs: request/response value types
//! - failure.rs: `HttpFailure`, the only error that leaves this module
//! - transport.rs: `Transport` seam and the browser `fetch` implementation
//! - client.rs: `HttpResourceClient` (auth header, status handling, envelopes)

mod client;
mod failure;
mod request;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::HttpResourceClient;
pub use failure::{server_message, HttpFailure, GENERIC_FAILURE_MESSAGE};
pub use request::{
    ApiRequest, AuthMode, FilePart, HttpMethod, MultipartForm, OutgoingRequest, RawResponse,
    RequestBody,
};
pub use transport::{FetchTransport, Transport};
