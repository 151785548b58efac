//! `get-order-by-id`: single order lookup including line items,
//! addresses and fulfillments.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{edge_nodes, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "get-order-by-id";

const QUERY: &str = r#"
query GetOrderById($id: ID!) {
  order(id: $id) {
    id
    name
    email
    phone
    createdAt
    closedAt
    cancelledAt
    displayFinancialStatus
    displayFulfillmentStatus
    note
    tags
    totalPriceSet {
      shopMoney {
        amount
        currencyCode
      }
    }
    subtotalPriceSet {
      shopMoney {
        amount
        currencyCode
      }
    }
    totalShippingPriceSet {
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
    shippingAddress {
      address1
      address2
      city
      province
      country
      zip
      firstName
      lastName
      phone
    }
    lineItems(first: 20) {
      edges {
        node {
          id
          title
          quantity
          sku
          variant {
            id
            title
            price
          }
          originalTotalSet {
            shopMoney {
              amount
              currencyCode
            }
          }
        }
      }
    }
    fulfillments {
      id
      status
      createdAt
      trackingInfo {
        number
        url
        company
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub order_id: String,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get a single order by its ID".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "orderId": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Order ID, e.g. gid://shopify/Order/1234567890"
                }
            },
            "required": ["orderId"]
        }),
    }
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    if input.order_id.is_empty() {
        return Err(ToolError::InvalidInput(
            "orderId must not be empty".to_string(),
        ));
    }

    let data = client
        .request(QUERY, json!({ "id": input.order_id }))
        .await?;

    let order = &data["order"];
    if order.is_null() {
        return Err(ToolError::NotFound(format!(
            "Order with ID {} not found",
            input.order_id
        )));
    }

    let line_items: Vec<Value> = edge_nodes(&order["lineItems"])
        .into_iter()
        .map(|item| {
            json!({
                "id": item["id"],
                "title": item["title"],
                "quantity": item["quantity"],
                "sku": item["sku"],
                "variant": item["variant"],
                "originalTotal": item["originalTotalSet"]["shopMoney"],
            })
        })
        .collect();

    Ok(json!({
        "order": {
            "id": order["id"],
            "name": order["name"],
            "email": order["email"],
            "phone": order["phone"],
            "createdAt": order["createdAt"],
            "closedAt": order["closedAt"],
            "cancelledAt": order["cancelledAt"],
            "financialStatus": order["displayFinancialStatus"],
            "fulfillmentStatus": order["displayFulfillmentStatus"],
            "note": order["note"],
            "tags": order["tags"],
            "totalPrice": order["totalPriceSet"]["shopMoney"],
            "subtotalPrice": order["subtotalPriceSet"]["shopMoney"],
            "totalShippingPrice": order["totalShippingPriceSet"]["shopMoney"],
            "customer": order["customer"],
            "shippingAddress": order["shippingAddress"],
            "lineItems": line_items,
            "fulfillments": order["fulfillments"],
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_is_required() {
        assert!(serde_json::from_value::<Input>(json!({})).is_err());
    }
}
