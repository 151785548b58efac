//! `get-orders`: paginated order search filtered by status.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_limit, edge_nodes, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "get-orders";

const QUERY: &str = r#"
query GetOrders($first: Int!, $query: String) {
  orders(first: $first, query: $query, sortKey: CREATED_AT, reverse: true) {
    edges {
      node {
        id
        name
        email
        createdAt
        closedAt
        cancelledAt
        displayFinancialStatus
        displayFulfillmentStatus
        totalPriceSet {
          shopMoney {
            amount
            currencyCode
          }
        }
        customer {
          id
          email
          firstName
          lastName
        }
        lineItems(first: 10) {
          edges {
            node {
              id
              title
              quantity
              sku
              originalTotalSet {
                shopMoney {
                  amount
                  currencyCode
                }
              }
            }
          }
        }
        tags
        note
      }
    }
  }
}
"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Any,
    Open,
    Closed,
    Cancelled,
}

impl OrderStatus {
    /// Shopify search syntax for the status filter; `any` means no filter.
    fn as_query(self) -> Option<&'static str> {
        match self {
            OrderStatus::Any => None,
            OrderStatus::Open => Some("status:open"),
            OrderStatus::Closed => Some("status:closed"),
            OrderStatus::Cancelled => Some("status:cancelled"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get shopify orders with optional status filter".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["any", "open", "closed", "cancelled"],
                    "default": "any",
                    "description": "Filter orders by status"
                },
                "limit": {
                    "type": "number",
                    "default": 10,
                    "description": "Maximum number of orders to return"
                }
            }
        }),
    }
}

fn reshape_order(order: Value) -> Value {
    let line_items: Vec<Value> = edge_nodes(&order["lineItems"])
        .into_iter()
        .map(|item| {
            json!({
                "id": item["id"],
                "title": item["title"],
                "quantity": item["quantity"],
                "sku": item["sku"],
                "originalTotal": item["originalTotalSet"]["shopMoney"],
            })
        })
        .collect();

    json!({
        "id": order["id"],
        "name": order["name"],
        "email": order["email"],
        "createdAt": order["createdAt"],
        "closedAt": order["closedAt"],
        "cancelledAt": order["cancelledAt"],
        "financialStatus": order["displayFinancialStatus"],
        "fulfillmentStatus": order["displayFulfillmentStatus"],
        "totalPrice": order["totalPriceSet"]["shopMoney"],
        "customer": order["customer"],
        "lineItems": line_items,
        "tags": order["tags"],
        "note": order["note"],
    })
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    let variables = json!({
        "first": input.limit,
        "query": input.status.as_query(),
    });

    let data = client.request(QUERY, variables).await?;

    let orders: Vec<Value> = edge_nodes(&data["orders"])
        .into_iter()
        .map(reshape_order)
        .collect();

    Ok(json!({ "orders": orders }))
}
