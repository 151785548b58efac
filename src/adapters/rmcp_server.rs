//! MCP server adapter built on the official rmcp SDK.
//!
//! Wraps the tool registry ([`crate::domain::ToolPort`]) and exposes it
//! through the standard MCP protocol. Every tool result is returned as a
//! single text-content item holding the JSON-serialized payload.

use crate::domain::ToolPort;
use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use std::sync::Arc;
use tracing::info;

/// Shopify MCP server handler.
#[derive(Clone)]
pub struct ShopifyMcpServer {
    tool_handler: Arc<dyn ToolPort>,
}

impl ShopifyMcpServer {
    pub fn new(tool_handler: Arc<dyn ToolPort>) -> Self {
        Self { tool_handler }
    }
}

impl ServerHandler for ShopifyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "shopify".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "MCP Server for Shopify API, enabling interaction with store data through GraphQL API"
                    .to_string(),
            ),
        }
    }

    fn ping(
        &self,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), McpError>> + Send + '_ {
        async move {
            info!("MCP ping received");
            Ok(())
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let handler = self.tool_handler.clone();
        async move {
            let tools = handler
                .list_tools()
                .await
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;

            let mcp_tools: Vec<Tool> = tools
                .into_iter()
                .map(|t| {
                    // Input schema must be a JSON object.
                    let schema = match t.input_schema {
                        serde_json::Value::Object(obj) => obj,
                        _ => serde_json::Map::new(),
                    };
                    Tool::new(t.name, t.description, schema)
                })
                .collect();

            Ok(ListToolsResult {
                tools: mcp_tools,
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let handler = self.tool_handler.clone();
        async move {
            let name = request.name.as_ref();
            let args = request
                .arguments
                .map(serde_json::Value::Object)
                .unwrap_or(serde_json::Value::Null);

            let result = handler
                .execute_tool(name, args)
                .await
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            Ok(CallToolResult::success(vec![Content::text(
                result.to_string(),
            )]))
        }
    }
}
