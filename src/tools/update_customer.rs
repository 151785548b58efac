//! `update-customer`: `customerUpdate` mutation. Takes a bare numeric
//! customer id and converts it to gid form for the mutation input.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{edge_nodes, format_user_errors, MetafieldInput, ToolError};
use crate::domain::Tool;
use crate::shopify::{gid, ShopifyClient};

pub const NAME: &str = "update-customer";

const MUTATION: &str = r#"
mutation customerUpdate($input: CustomerInput!) {
  customerUpdate(input: $input) {
    customer {
      id
      firstName
      lastName
      email
      phone
      tags
      note
      taxExempt
      metafields(first: 10) {
        edges {
          node {
            id
            namespace
            key
            value
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    pub note: Option<String>,
    pub tax_exempt: Option<bool>,
    pub metafields: Option<Vec<MetafieldInput>>,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Update a customer's information".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "pattern": "^\\d+$",
                    "description": "Shopify customer ID, numeric excluding gid prefix"
                },
                "firstName": { "type": "string" },
                "lastName": { "type": "string" },
                "email": { "type": "string", "format": "email" },
                "phone": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "note": { "type": "string" },
                "taxExempt": { "type": "boolean" },
                "metafields": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "namespace": { "type": "string" },
                            "key": { "type": "string" },
                            "value": { "type": "string" },
                            "type": { "type": "string" }
                        },
                        "required": ["value"]
                    }
                }
            },
            "required": ["id"]
        }),
    }
}

fn build_customer_input(input: &Input) -> Value {
    let mut customer_input = Map::new();
    customer_input.insert("id".to_string(), json!(gid::customer_gid(&input.id)));

    if let Some(first_name) = &input.first_name {
        customer_input.insert("firstName".to_string(), json!(first_name));
    }
    if let Some(last_name) = &input.last_name {
        customer_input.insert("lastName".to_string(), json!(last_name));
    }
    if let Some(email) = &input.email {
        customer_input.insert("email".to_string(), json!(email));
    }
    if let Some(phone) = &input.phone {
        customer_input.insert("phone".to_string(), json!(phone));
    }
    if let Some(tags) = &input.tags {
        customer_input.insert("tags".to_string(), json!(tags));
    }
    if let Some(note) = &input.note {
        customer_input.insert("note".to_string(), json!(note));
    }
    if let Some(tax_exempt) = input.tax_exempt {
        customer_input.insert("taxExempt".to_string(), json!(tax_exempt));
    }
    if let Some(metafields) = &input.metafields {
        customer_input.insert("metafields".to_string(), json!(metafields));
    }

    Value::Object(customer_input)
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    if !gid::is_numeric_id(&input.id) {
        return Err(ToolError::InvalidInput(
            "id must be numeric, excluding the gid prefix".to_string(),
        ));
    }

    let variables = json!({ "input": build_customer_input(&input) });
    let data = client.request(MUTATION, variables).await?;

    let payload = &data["customerUpdate"];
    if let Some(errors) = payload["userErrors"].as_array() {
        if !errors.is_empty() {
            return Err(ToolError::Rejected(format!(
                "Failed to update customer: {}",
                format_user_errors(errors)
            )));
        }
    }

    let customer = &payload["customer"];
    let metafields = edge_nodes(&customer["metafields"]);

    Ok(json!({
        "customer": {
            "id": customer["id"],
            "firstName": customer["firstName"],
            "lastName": customer["lastName"],
            "email": customer["email"],
            "phone": customer["phone"],
            "tags": customer["tags"],
            "note": customer["note"],
            "taxExempt": customer["taxExempt"],
            "metafields": metafields,
        }
    }))
}
