//! Shopify tool implementations, one file per tool.
//!
//! Every tool follows the same contract: a typed input struct
//! (deserialized and validated before any upstream call), a descriptor with
//! the declared JSON Schema, and an `execute` that issues exactly one
//! GraphQL operation through the shared [`ShopifyClient`] and reshapes the
//! nested edge/node response into a flat JSON payload.

pub mod get_customer_orders;
pub mod get_customers;
pub mod get_order_by_id;
pub mod get_orders;
pub mod get_product_by_id;
pub mod get_products;
pub mod update_customer;
pub mod update_order;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Metafield payload accepted by the two update tools and forwarded into the
/// mutation input verbatim (absent fields are omitted, not sent as null).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

/// Default page size for the list tools.
pub(crate) fn default_limit() -> u32 {
    10
}

/// Failure of a single tool invocation. The process keeps serving; the
/// dispatcher surfaces this to the caller as a failed invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input rejected before any upstream call was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The upstream reported zero matching records.
    #[error("{0}")]
    NotFound(String),

    /// A mutation came back with a non-empty `userErrors` list.
    #[error("{0}")]
    Rejected(String),

    /// Transport or GraphQL-level failure from the upstream client.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),
}

/// Flatten a paginated `{ edges: [{ node: … }] }` wrapper into plain nodes.
/// Missing or malformed containers flatten to an empty list.
pub(crate) fn edge_nodes(connection: &Value) -> Vec<Value> {
    connection["edges"]
        .as_array()
        .map(|edges| edges.iter().map(|edge| edge["node"].clone()).collect())
        .unwrap_or_default()
}

/// Join mutation `userErrors` as `field: message` pairs in input order.
pub(crate) fn format_user_errors(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|e| {
            let field = match &e["field"] {
                Value::String(s) => s.clone(),
                Value::Array(parts) => parts
                    .iter()
                    .filter_map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("."),
                _ => "input".to_string(),
            };
            let message = e["message"].as_str().unwrap_or_default();
            format!("{field}: {message}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Regroup Shopify's `priceRangeV2` into the flat `priceRange` shape the
/// product tools return.
pub(crate) fn reshape_price_range(price_range: &Value) -> Value {
    serde_json::json!({
        "minPrice": {
            "amount": price_range["minVariantPrice"]["amount"],
            "currencyCode": price_range["minVariantPrice"]["currencyCode"],
        },
        "maxPrice": {
            "amount": price_range["maxVariantPrice"]["amount"],
            "currencyCode": price_range["maxVariantPrice"]["currencyCode"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edge_nodes_flattens_connection() {
        let connection = json!({
            "edges": [
                { "node": { "id": "1" } },
                { "node": { "id": "2" } },
            ]
        });
        let nodes = edge_nodes(&connection);
        assert_eq!(nodes, vec![json!({ "id": "1" }), json!({ "id": "2" })]);
    }

    #[test]
    fn edge_nodes_tolerates_missing_edges() {
        assert!(edge_nodes(&json!({})).is_empty());
        assert!(edge_nodes(&json!(null)).is_empty());
    }

    #[test]
    fn user_errors_keep_input_order() {
        let errors = vec![
            json!({ "field": ["input", "email"], "message": "is invalid" }),
            json!({ "field": "phone", "message": "is taken" }),
            json!({ "field": null, "message": "unknown failure" }),
        ];
        assert_eq!(
            format_user_errors(&errors),
            "input.email: is invalid, phone: is taken, input: unknown failure"
        );
    }

    #[test]
    fn price_range_regroups_min_max() {
        let raw = json!({
            "minVariantPrice": { "amount": "5.00", "currencyCode": "USD" },
            "maxVariantPrice": { "amount": "9.00", "currencyCode": "USD" },
        });
        let reshaped = reshape_price_range(&raw);
        assert_eq!(reshaped["minPrice"]["amount"], "5.00");
        assert_eq!(reshaped["maxPrice"]["currencyCode"], "USD");
    }
}
