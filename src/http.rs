use crate::headers::RequestHeaders;

/// Everything needed to send one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub method: String,
    pub headers: RequestHeaders,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Drops `body` for GET and DELETE.
    pub fn new(url: String, method: String, headers: RequestHeaders, body: &str) -> Self {
        let body = sends_body(&method).then(|| body.to_string());
        Self {
            url,
            method,
            headers,
            body,
        }
    }
}

pub fn sends_body(method: &str) -> bool {
    method != "GET" && method != "DELETE"
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}
