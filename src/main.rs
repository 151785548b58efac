use clap::Parser;
use std::sync::Arc;
use tracing::info;

use shopify_mcp::adapters::rmcp_server::ShopifyMcpServer;
use shopify_mcp::adapters::tool_handler::ShopifyToolHandler;
use shopify_mcp::cli::Cli;
use shopify_mcp::config::Settings;
use shopify_mcp::shopify::ShopifyClient;
use shopify_mcp::transport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the STDIO transport keeps stdout clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        domain = %settings.domain,
        transport = %settings.transport,
        "Starting Shopify MCP server"
    );

    let client = ShopifyClient::new(&settings.domain, &settings.access_token);
    let tool_handler = Arc::new(ShopifyToolHandler::new(client));
    let server = ShopifyMcpServer::new(tool_handler);

    transport::serve(&settings, server).await
}
