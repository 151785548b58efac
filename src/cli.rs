use clap::Parser;
use std::path::PathBuf;

/// MCP server for the Shopify Admin API
#[derive(Parser, Debug, Clone)]
#[command(name = "shopify-mcp", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SHOPIFY_MCP_CONFIG", default_value = "shopify-mcp.toml")]
    pub config: PathBuf,

    /// Store domain, e.g. your-store.myshopify.com
    #[arg(long, env = "MYSHOPIFY_DOMAIN")]
    pub domain: Option<String>,

    /// Admin API access token
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Transport to serve on: stdio, sse or http
    #[arg(long, env = "TRANSPORT_TYPE")]
    pub transport: Option<String>,

    /// Port for the streamable HTTP transport
    #[arg(long, env = "HTTP_PORT")]
    pub port: Option<u16>,

    /// Port for the SSE transport
    #[arg(long, env = "SSE_PORT")]
    pub sse_port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["shopify-mcp"]);
        assert_eq!(cli.config, PathBuf::from("shopify-mcp.toml"));
        assert!(cli.transport.is_none());
        assert!(cli.port.is_none());
        assert!(cli.sse_port.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "shopify-mcp",
            "--domain",
            "demo.myshopify.com",
            "--access-token",
            "shpat_test",
            "--transport",
            "http",
            "--port",
            "8080",
            "--sse-port",
            "8081",
        ]);
        assert_eq!(cli.domain, Some("demo.myshopify.com".to_string()));
        assert_eq!(cli.access_token, Some("shpat_test".to_string()));
        assert_eq!(cli.transport, Some("http".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.sse_port, Some(8081));
    }
}
