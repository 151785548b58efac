use config::{Config, File};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::cli::Cli;

/// Serving mode, chosen once at startup and never changed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// One implicit session over the process's stdin/stdout.
    Stdio,
    /// SSE endpoint with a companion message endpoint, one session per
    /// subscriber connection.
    Sse,
    /// Streamable HTTP with session multiplexing under `/mcp`.
    Http,
}

impl FromStr for TransportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            "http" => Ok(Self::Http),
            other => Err(anyhow::anyhow!(
                "unknown transport type: {other} (available options: stdio, sse, http)"
            )),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Stdio => f.write_str("stdio"),
            TransportKind::Sse => f.write_str("sse"),
            TransportKind::Http => f.write_str("http"),
        }
    }
}

/// Raw shape of the optional settings file, before CLI overrides and
/// required-field checks.
#[derive(Debug, Deserialize)]
struct RawSettings {
    domain: Option<String>,
    access_token: Option<String>,
    transport: String,
    http_port: u16,
    sse_port: u16,
}

/// Validated process configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Store domain, e.g. `your-store.myshopify.com`.
    pub domain: String,
    /// Admin API access token.
    pub access_token: String,
    pub transport: TransportKind,
    pub http_port: u16,
    pub sse_port: u16,
}

impl Settings {
    /// Load settings from the optional config file, then apply CLI/env
    /// overrides (CLI > environment > config file > defaults).
    ///
    /// # Errors
    ///
    /// Missing domain or access token, or an unrecognized transport mode,
    /// is a fatal configuration error.
    pub fn new_with_cli(cli: &Cli) -> anyhow::Result<Self> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("transport", "stdio")?
            .set_default("http_port", 3000)?
            .set_default("sse_port", 3001)?
            .build()?;

        let mut raw: RawSettings = s.try_deserialize()?;

        if let Some(domain) = &cli.domain {
            raw.domain = Some(domain.clone());
        }
        if let Some(access_token) = &cli.access_token {
            raw.access_token = Some(access_token.clone());
        }
        if let Some(transport) = &cli.transport {
            raw.transport = transport.clone();
        }
        if let Some(port) = cli.port {
            raw.http_port = port;
        }
        if let Some(sse_port) = cli.sse_port {
            raw.sse_port = sse_port;
        }

        let domain = raw.domain.ok_or_else(|| {
            anyhow::anyhow!(
                "MYSHOPIFY_DOMAIN is required (pass --domain=your-store.myshopify.com or set it in the config file)"
            )
        })?;
        let access_token = raw.access_token.ok_or_else(|| {
            anyhow::anyhow!(
                "SHOPIFY_ACCESS_TOKEN is required (pass --access-token=your_token or set it in the config file)"
            )
        })?;

        Ok(Settings {
            domain,
            access_token,
            transport: raw.transport.parse()?,
            http_port: raw.http_port,
            sse_port: raw.sse_port,
        })
    }
}
