/// Raised before anything is sent when the method or URL is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid method or URL")]
pub struct ValidationError;

/// Any failure of the network call itself, including reading the body.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("runtime unavailable: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),
}
