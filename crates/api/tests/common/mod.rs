#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use carledger_api::config::ServerConfig;
use carledger_api::routes;
use carledger_api::state::AppState;
use carledger_ledger::{Ledger, MemoryLedger};

/// Dealer-organization test credential (issuer O = `aMSP.example.com`).
pub const DEALER_PEM: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/dealer.pem"));
/// Police-organization test credential (issuer O = `bMSP.example.com`).
pub const POLICE_PEM: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/police.pem"));

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        dealer_org: "aMSP".to_string(),
        police_org: "bMSP".to_string(),
    }
}

/// Build the full application router with all middleware layers and a fresh
/// in-memory ledger.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let ledger: Arc<dyn Ledger> = Arc::new(MemoryLedger::new());

    let state = AppState {
        ledger,
        policy: Arc::new(config.authz_policy()),
        config: Arc::new(config),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Base64-encode a credential blob for the invocation request.
pub fn credential(pem: &[u8]) -> String {
    BASE64.encode(pem)
}

/// Send a GET request to the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a JSON body to the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST an invocation request with the given operation, args, and
/// credential blob.
pub async fn invoke(app: Router, operation: &str, args: &[&str], pem: &[u8]) -> Response {
    post_json(
        app,
        "/api/v1/invoke",
        serde_json::json!({
            "operation": operation,
            "args": args,
            "credential": credential(pem),
        }),
    )
    .await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
