//! HTTP info source against a local server.
#![cfg(feature = "http")]

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use ark_explorer::http::HttpInfoSource;
use ark_explorer::{InfoError, NetworkInfo, NetworkInfoSource};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn source(base: &str) -> HttpInfoSource {
    HttpInfoSource::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_info() {
    let body = format!(r#"{{"signerPubkey":"03{}","network":"mutinynet","roundInterval":"10"}}"#, "aa".repeat(32));
    let base = serve(Router::new().route("/v1/info", get(move || async move { body }))).await;

    let asp = source(&format!("{}/", base)).fetch().await.unwrap();
    assert_eq!(asp.network, "mutinynet");

    let info = NetworkInfo::try_from(asp).unwrap();
    assert!(info.is_testnet());
    assert_eq!(info.server_pubkey.x_only().as_bytes(), &[0xaa; 32]);
}

#[tokio::test]
async fn test_error_status_is_bad_response() {
    let base = serve(Router::new().route(
        "/v1/info",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    ))
    .await;

    match source(&base).fetch().await {
        Err(InfoError::BadResponse(msg)) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("maintenance"));
        }
        other => panic!("expected BadResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let base = serve(Router::new().route("/v1/info", get(|| async { "not json" }))).await;
    assert!(matches!(source(&base).fetch().await, Err(InfoError::Decode(_))));
}

#[tokio::test]
async fn test_missing_route_is_bad_response() {
    let base = serve(Router::new()).await;
    assert!(matches!(source(&base).fetch().await, Err(InfoError::BadResponse(_))));
}
