//! Shopify Admin API GraphQL client.
//!
//! A thin GraphQL-over-HTTPS client bound to one store domain and one access
//! token. Every tool shares a single instance; there is no retry, caching or
//! rate-limit handling here.

pub mod gid;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Admin API version the queries in `crate::tools` are written against.
pub const API_VERSION: &str = "2023-07";

/// Errors that can occur when talking to the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status code.
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response carried a non-empty GraphQL `errors` array.
    #[error("GraphQL errors: {0}")]
    GraphQL(String),

    /// Neither `data` nor `errors` was present in the response.
    #[error("no data in GraphQL response")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
}

/// Shared GraphQL client for the Shopify Admin API.
///
/// Constructed once at startup from `{store domain, access token}` and passed
/// by reference into every tool execution.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    /// Create a client for `https://{domain}/admin/api/{version}/graphql.json`.
    pub fn new(domain: &str, access_token: &str) -> Self {
        let endpoint = format!("https://{domain}/admin/api/{API_VERSION}/graphql.json");
        Self::with_endpoint(endpoint, access_token)
    }

    /// Create a client against an explicit endpoint URL. Used by tests to
    /// point at a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>, access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_token: access_token.to_string(),
        }
    }

    /// Execute one GraphQL query or mutation and return the `data` payload.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx responses and GraphQL-level errors.
    pub async fn request(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        debug!(endpoint = %self.endpoint, "issuing GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShopifyError::Status(status));
        }

        let body: GraphQLResponse = response.json().await?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ShopifyError::GraphQL(joined));
            }
        }

        body.data.ok_or(ShopifyError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_api_version() {
        let client = ShopifyClient::new("demo.myshopify.com", "token");
        assert_eq!(
            client.endpoint,
            "https://demo.myshopify.com/admin/api/2023-07/graphql.json"
        );
    }

    #[test]
    fn error_display() {
        let err = ShopifyError::GraphQL("Field 'foo' doesn't exist".to_string());
        assert_eq!(err.to_string(), "GraphQL errors: Field 'foo' doesn't exist");
    }
}
