//! `get-customer-orders`: orders belonging to one customer, looked up by
//! bare numeric id (converted to gid form before querying).

use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_limit, edge_nodes, ToolError};
use crate::domain::Tool;
use crate::shopify::{gid, ShopifyClient};

pub const NAME: &str = "get-customer-orders";

const QUERY: &str = r#"
query GetCustomerOrders($customerId: ID!, $first: Int!) {
  customer(id: $customerId) {
    id
    firstName
    lastName
    email
    orders(first: $first, sortKey: CREATED_AT, reverse: true) {
      edges {
        node {
          id
          name
          createdAt
          displayFinancialStatus
          displayFulfillmentStatus
          totalPriceSet {
            shopMoney {
              amount
              currencyCode
            }
          }
          lineItems(first: 10) {
            edges {
              node {
                id
                title
                quantity
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub customer_id: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get orders for a specific customer".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "customerId": {
                    "type": "string",
                    "pattern": "^\\d+$",
                    "description": "Shopify customer ID, numeric excluding gid prefix"
                },
                "limit": {
                    "type": "number",
                    "default": 10,
                    "description": "Maximum number of orders to return"
                }
            },
            "required": ["customerId"]
        }),
    }
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    if !gid::is_numeric_id(&input.customer_id) {
        return Err(ToolError::InvalidInput(
            "customerId must be numeric, excluding the gid prefix".to_string(),
        ));
    }

    let variables = json!({
        "customerId": gid::customer_gid(&input.customer_id),
        "first": input.limit,
    });

    let data = client.request(QUERY, variables).await?;

    let customer = &data["customer"];
    if customer.is_null() {
        return Err(ToolError::NotFound(format!(
            "Customer with ID {} not found",
            input.customer_id
        )));
    }

    let orders: Vec<Value> = edge_nodes(&customer["orders"])
        .into_iter()
        .map(|order| {
            let line_items = edge_nodes(&order["lineItems"]);
            json!({
                "id": order["id"],
                "name": order["name"],
                "createdAt": order["createdAt"],
                "financialStatus": order["displayFinancialStatus"],
                "fulfillmentStatus": order["displayFulfillmentStatus"],
                "totalPrice": order["totalPriceSet"]["shopMoney"],
                "lineItems": line_items,
            })
        })
        .collect();

    Ok(json!({
        "customer": {
            "id": customer["id"],
            "firstName": customer["firstName"],
            "lastName": customer["lastName"],
            "email": customer["email"],
        },
        "orders": orders,
    }))
}
