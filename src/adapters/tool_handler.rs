//! Tool registry and dispatcher.
//!
//! Binds each tool's name to its declared input shape and execute function.
//! Input is deserialized into the tool's typed struct (defaults applied,
//! unknown enum values rejected) before any upstream call; a validation
//! failure fails the whole invocation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::{Tool, ToolPort};
use crate::shopify::ShopifyClient;
use crate::tools::{
    self, get_customer_orders, get_customers, get_order_by_id, get_orders, get_product_by_id,
    get_products, update_customer, update_order,
};

/// Registry of the eight Shopify tools, sharing one upstream client.
///
/// The client is injected at construction; there is no separate initialize
/// step, so an "uninitialized tool" state cannot exist.
pub struct ShopifyToolHandler {
    client: ShopifyClient,
}

impl ShopifyToolHandler {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }
}

fn parse<T: DeserializeOwned>(args: Value) -> Result<T, tools::ToolError> {
    serde_json::from_value(args).map_err(|e| tools::ToolError::InvalidInput(e.to_string()))
}

#[async_trait]
impl ToolPort for ShopifyToolHandler {
    async fn execute_tool(&self, name: &str, args: Value) -> anyhow::Result<Value> {
        debug!(tool = name, "dispatching tool invocation");

        // Callers may omit the arguments object entirely.
        let args = if args.is_null() { json!({}) } else { args };

        let client = &self.client;
        let result = match name {
            get_products::NAME => get_products::execute(client, parse(args)?).await,
            get_product_by_id::NAME => get_product_by_id::execute(client, parse(args)?).await,
            get_customers::NAME => get_customers::execute(client, parse(args)?).await,
            get_customer_orders::NAME => get_customer_orders::execute(client, parse(args)?).await,
            get_orders::NAME => get_orders::execute(client, parse(args)?).await,
            get_order_by_id::NAME => get_order_by_id::execute(client, parse(args)?).await,
            update_order::NAME => update_order::execute(client, parse(args)?).await,
            update_customer::NAME => update_customer::execute(client, parse(args)?).await,
            _ => return Err(anyhow::anyhow!("Tool not found: {}", name)),
        };

        result.map_err(Into::into)
    }

    async fn list_tools(&self) -> anyhow::Result<Vec<Tool>> {
        Ok(vec![
            get_products::descriptor(),
            get_product_by_id::descriptor(),
            get_customers::descriptor(),
            get_orders::descriptor(),
            get_order_by_id::descriptor(),
            update_order::descriptor(),
            get_customer_orders::descriptor(),
            update_customer::descriptor(),
        ])
    }
}
