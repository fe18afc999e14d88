use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::failure::HttpFailure;
use super::request::{HttpMethod, MultipartForm, OutgoingRequest, RawResponse, RequestBody};

/// Network seam of the client. Futures are `!Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, HttpFailure>;
}

/// Browser `fetch` via gloo-net, bounded by a client-side timeout
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse, HttpFailure> {
        let pending = Box::pin(dispatch(request));
        let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(pending, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(HttpFailure::timeout(self.timeout_ms)),
        }
    }
}

async fn dispatch(request: OutgoingRequest) -> Result<RawResponse, HttpFailure> {
    let method = match request.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    };

    let mut builder = RequestBuilder::new(&request.url)
        .method(method)
        .header("Accept", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    // multipart boundary is set by the browser, so no Content-Type here
    let prepared = match &request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(value),
        RequestBody::Multipart(form) => builder.body(form_data(form)?),
    }
    .map_err(HttpFailure::network)?;

    let response = prepared.send().await.map_err(HttpFailure::network)?;
    let status = response.status();
    let body = response.text().await.map_err(HttpFailure::decode)?;

    Ok(RawResponse { status, body })
}

fn form_data(form: &MultipartForm) -> Result<FormData, HttpFailure> {
    let data = FormData::new().map_err(js_failure)?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value).map_err(js_failure)?;
    }
    for file in &form.files {
        let bytes = js_sys::Uint8Array::from(&file.bytes[..]);
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&file.media_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_failure)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(js_failure)?;
    }
    Ok(data)
}

fn js_failure(error: JsValue) -> HttpFailure {
    HttpFailure::network(format!("{error:?}"))
}
