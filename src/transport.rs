//! Transport front-end.
//!
//! One of three mutually exclusive serving modes, selected at startup and
//! fixed for the process lifetime. Session bookkeeping for the two HTTP
//! modes lives inside the rmcp transport components; this module only
//! selects, binds and shuts down.

use anyhow::Context;
use rmcp::transport::sse_server::SseServer;
use rmcp::ServiceExt;
use std::net::SocketAddr;
use tracing::info;

use crate::adapters::rmcp_server::ShopifyMcpServer;
use crate::config::{Settings, TransportKind};

/// Serve until a termination signal arrives (or, for stdio, until the
/// peer closes the pipe).
pub async fn serve(settings: &Settings, server: ShopifyMcpServer) -> anyhow::Result<()> {
    match settings.transport {
        TransportKind::Stdio => serve_stdio(server).await,
        TransportKind::Sse => serve_sse(settings.sse_port, server).await,
        TransportKind::Http => serve_http(settings.http_port, server).await,
    }
}

async fn serve_stdio(server: ShopifyMcpServer) -> anyhow::Result<()> {
    info!("Starting MCP server with STDIO transport");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start STDIO server")?;

    tokio::select! {
        quit = service.waiting() => {
            quit.context("STDIO server terminated abnormally")?;
        }
        _ = shutdown_signal() => {
            info!("Received shutdown signal, closing STDIO server");
        }
    }
    Ok(())
}

async fn serve_sse(port: u16, server: ShopifyMcpServer) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Starting MCP server with SSE transport on port {port}");

    let sse_server = SseServer::serve(addr)
        .await
        .context("failed to bind SSE server")?;
    let ct = sse_server.with_service(move || server.clone());
    info!("SSE server started on http://{addr}/sse");

    shutdown_signal().await;
    info!("Received shutdown signal, closing SSE server");
    ct.cancel();
    Ok(())
}

async fn serve_http(port: u16, server: ShopifyMcpServer) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Starting MCP server with StreamableHTTP transport on port {port}");

    let app = crate::create_app(server);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind StreamableHTTP server")?;
    info!("StreamableHTTP server started on http://{addr}/mcp");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("StreamableHTTP server terminated abnormally")?;
    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
