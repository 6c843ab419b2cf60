//! One dispatch: read the form, build the request, validate, send, render.
//!
//! The dispatcher never touches the window directly. It reads through a
//! [`FormSource`], sends through a [`Transport`] and writes through an
//! [`OutputSink`], so every failure ends up on the sink rather than being
//! returned to the caller.

use crate::error::ValidationError;
use crate::headers::RequestHeaders;
use crate::http::ApiRequest;
use crate::transport::Transport;
use crate::url::{build_url, path_segments, query_string};

pub const STATUS_ERROR: &str = "Error";
pub const STATUS_VALIDATION_ERROR: &str = "Validation Error";

/// Where the dispatcher reads its inputs from.
pub trait FormSource {
    fn method(&self) -> &str;
    fn protocol(&self) -> &str;
    fn port(&self) -> &str;
    fn api_url(&self) -> &str;
    fn body(&self) -> &str;
    fn path_params(&self) -> &[String];
    fn query_params(&self) -> &[String];
    fn header_params(&self) -> &[String];
}

/// The two output surfaces. Each call replaces the previous text.
pub trait OutputSink {
    fn set_status(&mut self, status: String);
    fn set_body(&mut self, body: String);
}

/// An owned snapshot of the form, safe to move onto another thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub method: String,
    pub protocol: String,
    pub port: String,
    pub api_url: String,
    pub body: String,
    pub path_params: Vec<String>,
    pub query_params: Vec<String>,
    pub header_params: Vec<String>,
}

impl FormSource for FormValues {
    fn method(&self) -> &str {
        &self.method
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn port(&self) -> &str {
        &self.port
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn path_params(&self) -> &[String] {
        &self.path_params
    }

    fn query_params(&self) -> &[String] {
        &self.query_params
    }

    fn header_params(&self) -> &[String] {
        &self.header_params
    }
}

/// What ended up on the output surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub status: String,
    pub body: String,
}

impl OutputSink for Rendered {
    fn set_status(&mut self, status: String) {
        self.status = status;
    }

    fn set_body(&mut self, body: String) {
        self.body = body;
    }
}

pub fn validate_inputs(method: &str, url: &str) -> Result<(), ValidationError> {
    if method.is_empty() || !url.starts_with("http") {
        return Err(ValidationError);
    }
    Ok(())
}

/// Builds the request from the current form state. Nothing is cached.
pub fn prepare_request<F: FormSource + ?Sized>(form: &F) -> ApiRequest {
    let method = form.method().to_uppercase();
    let segments = path_segments(form.path_params());
    let query = query_string(form.query_params());

    let mut headers = RequestHeaders::seeded();
    headers.extend_from_params(form.header_params());

    let url = build_url(form.protocol(), form.port(), form.api_url(), &segments, &query);

    ApiRequest::new(url, method, headers, form.body())
}

/// Sends `request` and renders either the response or the failure.
pub async fn fetch_api<T, S>(transport: &T, request: &ApiRequest, sink: &mut S)
where
    T: Transport + ?Sized,
    S: OutputSink + ?Sized,
{
    tracing::debug!(
        method = %request.method,
        headers = request.headers.len(),
        has_body = request.body.is_some(),
        "sending request"
    );

    match transport.send(request).await {
        Ok(response) => {
            sink.set_status(format!("Status Code: {}", response.status));
            sink.set_body(response.body);
        }
        Err(e) => {
            tracing::warn!(url = %request.url, error = %e, "request failed");
            sink.set_status(STATUS_ERROR.to_string());
            sink.set_body(e.to_string());
        }
    }
}

/// Runs a full dispatch against the current form state.
pub async fn call_api<F, T, S>(form: &F, transport: &T, sink: &mut S)
where
    F: FormSource + ?Sized,
    T: Transport + ?Sized,
    S: OutputSink + ?Sized,
{
    let request = prepare_request(form);
    tracing::info!(url = %request.url, "final URL");

    if let Err(e) = validate_inputs(&request.method, &request.url) {
        tracing::warn!(method = %request.method, url = %request.url, "{e}");
        sink.set_status(STATUS_VALIDATION_ERROR.to_string());
        sink.set_body(e.to_string());
        return;
    }

    fetch_api(transport, &request, sink).await;
}
