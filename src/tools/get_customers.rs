//! `get-customers`: paginated customer search.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_limit, edge_nodes, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "get-customers";

const QUERY: &str = r#"
query GetCustomers($first: Int!, $query: String) {
  customers(first: $first, query: $query) {
    edges {
      node {
        id
        firstName
        lastName
        email
        phone
        tags
        note
        verifiedEmail
        taxExempt
        numberOfOrders
        amountSpent {
          amount
          currencyCode
        }
        createdAt
        updatedAt
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub search_query: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get shopify customers with pagination or search by name/email".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "searchQuery": {
                    "type": "string",
                    "description": "Search query to filter customers (name, email, phone)"
                },
                "limit": {
                    "type": "number",
                    "default": 10,
                    "description": "Maximum number of customers to return"
                }
            }
        }),
    }
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    let variables = json!({
        "first": input.limit,
        "query": input.search_query,
    });

    let data = client.request(QUERY, variables).await?;

    let customers: Vec<Value> = edge_nodes(&data["customers"])
        .into_iter()
        .map(|customer| {
            json!({
                "id": customer["id"],
                "firstName": customer["firstName"],
                "lastName": customer["lastName"],
                "email": customer["email"],
                "phone": customer["phone"],
                "tags": customer["tags"],
                "note": customer["note"],
                "verifiedEmail": customer["verifiedEmail"],
                "taxExempt": customer["taxExempt"],
                "numberOfOrders": customer["numberOfOrders"],
                "amountSpent": customer["amountSpent"],
                "createdAt": customer["createdAt"],
                "updatedAt": customer["updatedAt"],
            })
        })
        .collect();

    Ok(json!({ "customers": customers }))
}
