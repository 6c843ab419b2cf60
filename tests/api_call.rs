//! End-to-end dispatches against a local axum server.
//!
//! The server binds an ephemeral port on 127.0.0.1 and the form points at
//! `localhost:<port>`, so every request goes through `HttpTransport` and a
//! real socket.

use api_caller::{FormValues, HttpTransport, Rendered, call_api};
use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::routing::{any, get};

async fn echo(method: Method, headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string()
    };

    format!(
        "method={method} content-type={} x-trace={} query={} body={body}",
        header("content-type"),
        header("x-trace"),
        query.unwrap_or_default(),
    )
}

async fn item(Path((kind, id)): Path<(String, String)>) -> String {
    format!("{kind}:{id}")
}

async fn missing() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "no such thing")
}

fn router() -> Router {
    Router::new()
        .route("/api/hello", any(echo))
        .route("/api/items/{kind}/{id}", get(item))
        .fallback(missing)
}

async fn spawn_server() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    port
}

fn form(port: u16, method: &str) -> FormValues {
    FormValues {
        method: method.to_string(),
        protocol: "http".to_string(),
        port: port.to_string(),
        api_url: "/api/hello".to_string(),
        ..FormValues::default()
    }
}

#[tokio::test]
async fn get_reaches_the_server_without_a_body() {
    let port = spawn_server().await;
    let mut out = Rendered::default();
    let form = FormValues {
        body: "dropped".to_string(),
        ..form(port, "get")
    };

    call_api(&form, &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Status Code: 200");
    assert_eq!(
        out.body,
        "method=GET content-type=application/json x-trace=- query= body="
    );
}

#[tokio::test]
async fn post_sends_body_headers_and_query() {
    let port = spawn_server().await;
    let mut out = Rendered::default();
    let form = FormValues {
        body: "{\"name\":\"crab\"}".to_string(),
        query_params: vec!["a=1".to_string(), "".to_string(), " b=2 ".to_string()],
        header_params: vec!["X-Trace = t-1".to_string(), "ignored".to_string()],
        ..form(port, "post")
    };

    call_api(&form, &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Status Code: 200");
    assert_eq!(
        out.body,
        "method=POST content-type=application/json x-trace=t-1 query=a=1&b=2 body={\"name\":\"crab\"}"
    );
}

#[tokio::test]
async fn path_segments_are_encoded_into_the_url() {
    let port = spawn_server().await;
    let mut out = Rendered::default();
    let form = FormValues {
        api_url: "api/items".to_string(),
        path_params: vec![" books ".to_string(), "war and peace".to_string()],
        ..form(port, "GET")
    };

    call_api(&form, &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Status Code: 200");
    assert_eq!(out.body, "books:war and peace");
}

#[tokio::test]
async fn non_success_status_is_rendered_like_any_other() {
    let port = spawn_server().await;
    let mut out = Rendered::default();
    let form = FormValues {
        api_url: "/api/nothing".to_string(),
        ..form(port, "DELETE")
    };

    call_api(&form, &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Status Code: 404");
    assert_eq!(out.body, "no such thing");
}

#[tokio::test]
async fn unreachable_port_renders_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut out = Rendered::default();

    call_api(&form(port, "GET"), &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Error");
    assert!(out.body.starts_with("request failed"), "{}", out.body);
}

#[tokio::test]
async fn validation_error_never_reaches_the_network() {
    let mut out = Rendered::default();
    let form = FormValues {
        protocol: "ftp".to_string(),
        ..form(1, "GET")
    };

    call_api(&form, &HttpTransport::new(), &mut out).await;

    assert_eq!(out.status, "Validation Error");
    assert_eq!(out.body, "invalid method or URL");
}
