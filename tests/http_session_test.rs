//! Session behavior of the streamable-HTTP transport, exercised directly
//! against the router so rejected requests can be shown never to reach the
//! tool dispatcher.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use shopify_mcp::adapters::rmcp_server::ShopifyMcpServer;
use shopify_mcp::adapters::tool_handler::ShopifyToolHandler;
use shopify_mcp::shopify::ShopifyClient;
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> axum::Router {
    // The upstream is never contacted in these tests; the domain is a
    // placeholder that would fail DNS resolution if it were.
    let client = ShopifyClient::new("unreachable.invalid", "shpat_test");
    let handler = Arc::new(ShopifyToolHandler::new(client));
    shopify_mcp::create_app(ShopifyMcpServer::new(handler))
}

fn initialize_body() -> String {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "session-test", "version": "1.0.0" }
        }
    })
    .to_string()
}

#[tokio::test]
async fn initialize_without_session_id_mints_one() {
    let request = Request::builder()
        .uri("/mcp")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Accept", "application/json, text/event-stream")
        .body(Body::from(initialize_body()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session_id = response
        .headers()
        .get("mcp-session-id")
        .expect("initialize response must carry a session id");
    assert!(!session_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_session_id_is_rejected() {
    let request = Request::builder()
        .uri("/mcp")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Accept", "application/json, text/event-stream")
        .header("mcp-session-id", "definitely-not-a-session")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "id": 2, "method": "ping" }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "expected a client error, got {}",
        response.status()
    );
}

#[tokio::test]
async fn non_initialize_request_without_session_is_rejected() {
    let request = Request::builder()
        .uri("/mcp")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Accept", "application/json, text/event-stream")
        .body(Body::from(
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": { "name": "get-products", "arguments": {} }
            })
            .to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "expected a client error, got {}",
        response.status()
    );
}

#[tokio::test]
async fn terminate_with_unknown_session_is_rejected() {
    let request = Request::builder()
        .uri("/mcp")
        .method("DELETE")
        .header("mcp-session-id", "definitely-not-a-session")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "expected a client error, got {}",
        response.status()
    );
}
