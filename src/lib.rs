//! A desktop form for poking at a local HTTP API.
//!
//! The window lets you pick a protocol, port, base path and method, add
//! path segments, query entries and headers, then send a single request and
//! read back the status line and body.
//!
//! Request building and sending live outside the UI: [`dispatch::call_api`]
//! reads from a [`dispatch::FormSource`], sends through a
//! [`transport::Transport`] and writes to a [`dispatch::OutputSink`].

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod headers;
pub mod http;
pub mod transport;
pub mod url;

pub use dispatch::{FormSource, FormValues, OutputSink, Rendered, call_api};
pub use error::{TransportError, ValidationError};
pub use transport::{HttpTransport, Transport};
