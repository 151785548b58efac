//! `update-order`: `orderUpdate` mutation over tags, email, note, custom
//! attributes, metafields and the shipping address.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{edge_nodes, format_user_errors, MetafieldInput, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "update-order";

const MUTATION: &str = r#"
mutation OrderUpdate($input: OrderInput!) {
  orderUpdate(input: $input) {
    order {
      id
      name
      email
      note
      tags
      customAttributes {
        key
        value
      }
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
      shippingAddress {
        address1
        address2
        city
        company
        country
        firstName
        lastName
        phone
        province
        zip
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomAttributeInput {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: String,
    pub tags: Option<Vec<String>>,
    pub email: Option<String>,
    pub note: Option<String>,
    pub custom_attributes: Option<Vec<CustomAttributeInput>>,
    pub metafields: Option<Vec<MetafieldInput>>,
    pub shipping_address: Option<ShippingAddressInput>,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Update an existing order with new information".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Order ID, e.g. gid://shopify/Order/1234567890"
                },
                "tags": { "type": "array", "items": { "type": "string" } },
                "email": { "type": "string", "format": "email" },
                "note": { "type": "string" },
                "customAttributes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "key": { "type": "string" },
                            "value": { "type": "string" }
                        },
                        "required": ["key", "value"]
                    }
                },
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
                },
                "shippingAddress": {
                    "type": "object",
                    "properties": {
                        "address1": { "type": "string" },
                        "address2": { "type": "string" },
                        "city": { "type": "string" },
                        "company": { "type": "string" },
                        "country": { "type": "string" },
                        "firstName": { "type": "string" },
                        "lastName": { "type": "string" },
                        "phone": { "type": "string" },
                        "province": { "type": "string" },
                        "zip": { "type": "string" }
                    }
                }
            },
            "required": ["id"]
        }),
    }
}

fn build_order_input(input: &Input) -> Value {
    let mut order_input = Map::new();
    order_input.insert("id".to_string(), json!(input.id));

    if let Some(tags) = &input.tags {
        order_input.insert("tags".to_string(), json!(tags));
    }
    if let Some(email) = &input.email {
        order_input.insert("email".to_string(), json!(email));
    }
    if let Some(note) = &input.note {
        order_input.insert("note".to_string(), json!(note));
    }
    if let Some(attrs) = &input.custom_attributes {
        order_input.insert("customAttributes".to_string(), json!(attrs));
    }
    if let Some(metafields) = &input.metafields {
        order_input.insert("metafields".to_string(), json!(metafields));
    }
    if let Some(address) = &input.shipping_address {
        order_input.insert("shippingAddress".to_string(), json!(address));
    }

    Value::Object(order_input)
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    if input.id.is_empty() {
        return Err(ToolError::InvalidInput("id must not be empty".to_string()));
    }

    let variables = json!({ "input": build_order_input(&input) });
    let data = client.request(MUTATION, variables).await?;

    let payload = &data["orderUpdate"];
    if let Some(errors) = payload["userErrors"].as_array() {
        if !errors.is_empty() {
            return Err(ToolError::Rejected(format!(
                "Failed to update order: {}",
                format_user_errors(errors)
            )));
        }
    }

    let order = &payload["order"];
    let metafields = edge_nodes(&order["metafields"]);

    Ok(json!({
        "order": {
            "id": order["id"],
            "name": order["name"],
            "email": order["email"],
            "note": order["note"],
            "tags": order["tags"],
            "customAttributes": order["customAttributes"],
            "metafields": metafields,
            "shippingAddress": order["shippingAddress"],
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_mutation_input() {
        let input: Input = serde_json::from_value(json!({
            "id": "gid://shopify/Order/1",
            "note": "gift wrap",
        }))
        .unwrap();
        let order_input = build_order_input(&input);
        let obj = order_input.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["id"], "gid://shopify/Order/1");
        assert_eq!(obj["note"], "gift wrap");
        assert!(!obj.contains_key("email"));
    }

    #[test]
    fn shipping_address_serializes_camel_case() {
        let input: Input = serde_json::from_value(json!({
            "id": "gid://shopify/Order/1",
            "shippingAddress": { "firstName": "Ada", "zip": "10115" },
        }))
        .unwrap();
        let order_input = build_order_input(&input);
        let address = &order_input["shippingAddress"];
        assert_eq!(address["firstName"], "Ada");
        assert_eq!(address["zip"], "10115");
        assert!(address.get("lastName").is_none());
    }
}
