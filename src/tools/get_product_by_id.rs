//! `get-product-by-id`: single product lookup with images, variants and
//! collections flattened out of their connection wrappers.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{edge_nodes, reshape_price_range, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "get-product-by-id";

const QUERY: &str = r#"
query GetProductById($id: ID!) {
  product(id: $id) {
    id
    title
    description
    handle
    status
    createdAt
    updatedAt
    totalInventory
    priceRangeV2 {
      minVariantPrice {
        amount
        currencyCode
      }
      maxVariantPrice {
        amount
        currencyCode
      }
    }
    images(first: 5) {
      edges {
        node {
          id
          url
          altText
          width
          height
        }
      }
    }
    variants(first: 20) {
      edges {
        node {
          id
          title
          price
          inventoryQuantity
          sku
          selectedOptions {
            name
            value
          }
        }
      }
    }
    collections(first: 5) {
      edges {
        node {
          id
          title
        }
      }
    }
    tags
    vendor
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub product_id: String,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get a specific product by ID".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "productId": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Product ID, e.g. gid://shopify/Product/1234567890"
                }
            },
            "required": ["productId"]
        }),
    }
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    if input.product_id.is_empty() {
        return Err(ToolError::InvalidInput(
            "productId must not be empty".to_string(),
        ));
    }

    let data = client
        .request(QUERY, json!({ "id": input.product_id }))
        .await?;

    let product = &data["product"];
    if product.is_null() {
        return Err(ToolError::NotFound(format!(
            "Product with ID {} not found",
            input.product_id
        )));
    }

    let variants: Vec<Value> = edge_nodes(&product["variants"])
        .into_iter()
        .map(|variant| {
            json!({
                "id": variant["id"],
                "title": variant["title"],
                "price": variant["price"],
                "inventoryQuantity": variant["inventoryQuantity"],
                "sku": variant["sku"],
                "options": variant["selectedOptions"],
            })
        })
        .collect();

    let images = edge_nodes(&product["images"]);
    let collections = edge_nodes(&product["collections"]);

    Ok(json!({
        "product": {
            "id": product["id"],
            "title": product["title"],
            "description": product["description"],
            "handle": product["handle"],
            "status": product["status"],
            "createdAt": product["createdAt"],
            "updatedAt": product["updatedAt"],
            "totalInventory": product["totalInventory"],
            "priceRange": reshape_price_range(&product["priceRangeV2"]),
            "images": images,
            "variants": variants,
            "collections": collections,
            "tags": product["tags"],
            "vendor": product["vendor"],
        }
    }))
}
