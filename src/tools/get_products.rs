//! `get-products`: paginated product search, optionally filtered by title.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{default_limit, edge_nodes, reshape_price_range, ToolError};
use crate::domain::Tool;
use crate::shopify::ShopifyClient;

pub const NAME: &str = "get-products";

const QUERY: &str = r#"
query GetProducts($first: Int!, $query: String) {
  products(first: $first, query: $query) {
    edges {
      node {
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
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
        tags
        vendor
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub search_title: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

pub fn descriptor() -> Tool {
    Tool {
        name: NAME.to_string(),
        description: "Get all products or search by title".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "searchTitle": {
                    "type": "string",
                    "description": "Filter products whose title contains this text"
                },
                "limit": {
                    "type": "number",
                    "default": 10,
                    "description": "Maximum number of products to return"
                }
            }
        }),
    }
}

pub async fn execute(client: &ShopifyClient, input: Input) -> Result<Value, ToolError> {
    let variables = json!({
        "first": input.limit,
        "query": input
            .search_title
            .as_deref()
            .map(|title| format!("title:*{title}*")),
    });

    let data = client.request(QUERY, variables).await?;

    let products: Vec<Value> = edge_nodes(&data["products"])
        .into_iter()
        .map(|product| {
            let image = edge_nodes(&product["images"])
                .into_iter()
                .next()
                .unwrap_or(Value::Null);
            json!({
                "id": product["id"],
                "title": product["title"],
                "description": product["description"],
                "handle": product["handle"],
                "status": product["status"],
                "createdAt": product["createdAt"],
                "updatedAt": product["updatedAt"],
                "totalInventory": product["totalInventory"],
                "priceRange": reshape_price_range(&product["priceRangeV2"]),
                "featuredImage": image,
                "tags": product["tags"],
                "vendor": product["vendor"],
            })
        })
        .collect();

    Ok(json!({ "products": products }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_ten() {
        let input: Input = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.limit, 10);
        assert!(input.search_title.is_none());
    }

    #[test]
    fn search_title_is_optional() {
        let input: Input =
            serde_json::from_value(json!({ "searchTitle": "snow", "limit": 3 })).unwrap();
        assert_eq!(input.search_title.as_deref(), Some("snow"));
        assert_eq!(input.limit, 3);
    }
}
