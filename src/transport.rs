use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::TransportError;
use crate::headers::RequestHeaders;
use crate::http::{ApiRequest, ApiResponse};

/// Sends a request and reads the whole response body as text.
#[async_trait]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;
        let headers = header_map(&request.headers)?;

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

fn header_map(headers: &RequestHeaders) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();

    for (name, value) in headers.iter() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeader(format!("{name}: {value}")))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_case_insensitive() {
        let mut headers = RequestHeaders::seeded();
        headers.insert("content-type", "text/plain");

        let map = header_map(&headers).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["content-type"], "text/plain");
    }

    #[test]
    fn invalid_header_name_is_a_transport_error() {
        let mut headers = RequestHeaders::seeded();
        headers.insert("bad header", "x");

        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader(name) if name == "bad header"));
    }

    #[tokio::test]
    async fn invalid_method_fails_before_sending() {
        let request = ApiRequest::new(
            "http://localhost:9".to_string(),
            "NOT A METHOD".to_string(),
            RequestHeaders::seeded(),
            "",
        );

        let err = HttpTransport::new().send(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidMethod(_)));
    }

    #[tokio::test]
    async fn malformed_url_is_a_transport_error() {
        let request = ApiRequest::new(
            "http://localhost:not-a-port/api".to_string(),
            "GET".to_string(),
            RequestHeaders::seeded(),
            "",
        );

        let err = HttpTransport::new().send(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
