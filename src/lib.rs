//! # Shopify MCP Server
//!
//! An MCP (Model Context Protocol) server exposing Shopify Admin API
//! operations as tools. Each tool call is validated, translated into one
//! GraphQL request against the store and reshaped into a flat JSON payload.
//!
//! ## Tools
//!
//! `get-products`, `get-product-by-id`, `get-customers`, `get-orders`,
//! `get-order-by-id`, `update-order`, `get-customer-orders`,
//! `update-customer`.
//!
//! ## Architecture
//!
//! - **Domain**: the tool descriptor and registry port
//! - **Adapters**: the rmcp server handler and the tool registry
//! - **Shopify**: the shared upstream GraphQL client
//! - **Transport**: stdio / SSE / streamable-HTTP front-end
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use shopify_mcp::{cli::Cli, config::Settings};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cli = Cli::parse_from(["shopify-mcp", "--domain", "demo.myshopify.com",
//!                           "--access-token", "shpat_example"]);
//! let settings = Settings::new_with_cli(&cli)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod shopify;
pub mod tools;
pub mod transport;

use crate::adapters::rmcp_server::ShopifyMcpServer;
use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use std::sync::Arc;

/// Build the Axum router for the streamable-HTTP mode.
///
/// The rmcp transport service under `/mcp` owns the session map: the first
/// request must be an initialize request (which mints a session id), and
/// requests with an absent or unknown id are rejected with a client-error
/// status before they can reach the dispatcher.
pub fn create_app(server: ShopifyMcpServer) -> Router {
    let session_manager = Arc::new(LocalSessionManager::default());
    let config = StreamableHttpServerConfig::default();
    let mcp_service =
        StreamableHttpService::new(move || Ok(server.clone()), session_manager, config);

    Router::new().nest_service("/mcp", mcp_service).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
