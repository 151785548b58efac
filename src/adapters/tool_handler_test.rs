use super::tool_handler::ShopifyToolHandler;
use crate::domain::ToolPort;
use crate::shopify::ShopifyClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_PATH: &str = "/admin/api/2023-07/graphql.json";

fn handler_for(server: &MockServer) -> ShopifyToolHandler {
    let endpoint = format!("{}{}", server.uri(), GRAPHQL_PATH);
    ShopifyToolHandler::new(ShopifyClient::with_endpoint(endpoint, "shpat_test"))
}

#[tokio::test]
async fn lists_all_eight_tools() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let tools = handler.list_tools().await.unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "get-products",
            "get-product-by-id",
            "get-customers",
            "get-orders",
            "get-order-by-id",
            "update-order",
            "get-customer-orders",
            "update-customer",
        ]
    );
    for tool in &tools {
        assert_eq!(tool.input_schema["type"], "object");
    }
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool("drop-table", json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Tool not found"));
}

#[tokio::test]
async fn non_numeric_customer_id_fails_before_any_upstream_call() {
    let server = MockServer::start().await;
    // No request must ever reach the upstream.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    for args in [
        json!({ "customerId": "gid://shopify/Customer/1" }),
        json!({ "customerId": "12a4" }),
        json!({ "customerId": "" }),
    ] {
        let err = handler
            .execute_tool("get-customer-orders", args)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("numeric"), "got: {err}");
    }

    let err = handler
        .execute_tool("update-customer", json!({ "id": "not-a-number" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("numeric"));
}

#[tokio::test]
async fn get_products_flattens_edges_and_sends_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": {
                    "edges": [
                        { "node": {
                            "id": "gid://shopify/Product/1",
                            "title": "Snowboard",
                            "priceRangeV2": {
                                "minVariantPrice": { "amount": "10.0", "currencyCode": "EUR" },
                                "maxVariantPrice": { "amount": "20.0", "currencyCode": "EUR" }
                            },
                            "images": { "edges": [] },
                            "tags": ["winter"]
                        } }
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let result = handler
        .execute_tool("get-products", json!({ "searchTitle": "Snow", "limit": 5 }))
        .await
        .unwrap();

    let products = result["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert!(products.len() <= 5);
    // No edge/node wrapper may remain in the reshaped output.
    assert!(products[0].get("edges").is_none());
    assert!(products[0].get("node").is_none());
    assert_eq!(products[0]["title"], "Snowboard");
    assert_eq!(products[0]["priceRange"]["minPrice"]["amount"], "10.0");
}

#[tokio::test]
async fn get_orders_sends_status_filter_and_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "first": 5, "query": "status:open" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "orders": { "edges": [
                { "node": { "id": "gid://shopify/Order/1", "name": "#1001",
                            "totalPriceSet": {
                                "shopMoney": { "amount": "5.0", "currencyCode": "EUR" }
                            },
                            "lineItems": { "edges": [] } } }
            ] } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let result = handler
        .execute_tool("get-orders", json!({ "status": "open", "limit": 5 }))
        .await
        .unwrap();

    let orders = result["orders"].as_array().unwrap();
    assert!(orders.len() <= 5);
    assert_eq!(orders[0]["name"], "#1001");
    assert!(orders[0].get("node").is_none());
}

#[tokio::test]
async fn missing_product_error_names_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "product": null } })),
        )
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool(
            "get-product-by-id",
            json!({ "productId": "gid://shopify/Product/404" }),
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("gid://shopify/Product/404"));
}

#[tokio::test]
async fn mutation_user_errors_are_joined_in_input_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "customerUpdate": {
                "customer": null,
                "userErrors": [
                    { "field": ["input", "email"], "message": "Email is invalid" },
                    { "field": ["input", "phone"], "message": "Phone has already been taken" }
                ]
            } }
        })))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool(
            "update-customer",
            json!({ "id": "207119551", "email": "nope" }),
        )
        .await
        .unwrap_err();

    let message = err.to_string();
    let email_pos = message.find("input.email: Email is invalid").unwrap();
    let phone_pos = message
        .find("input.phone: Phone has already been taken")
        .unwrap();
    assert!(email_pos < phone_pos);
}

#[tokio::test]
async fn update_order_converts_user_errors_to_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "orderUpdate": {
                "order": null,
                "userErrors": [ { "field": ["input", "id"], "message": "Order does not exist" } ]
            } }
        })))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool("update-order", json!({ "id": "gid://shopify/Order/9", "note": "x" }))
        .await
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("input.id: Order does not exist"));
}

#[tokio::test]
async fn graphql_level_errors_surface_as_tool_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [ { "message": "Throttled" } ]
        })))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool("get-customers", json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Throttled"));
}

#[tokio::test]
async fn upstream_http_failure_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let err = handler
        .execute_tool("get-products", json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn customer_orders_use_gid_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": { "customerId": "gid://shopify/Customer/207119551", "first": 10 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "customer": {
                "id": "gid://shopify/Customer/207119551",
                "firstName": "Ada",
                "orders": { "edges": [
                    { "node": { "id": "gid://shopify/Order/1", "name": "#1001",
                                "totalPriceSet": {
                                    "shopMoney": { "amount": "7.0", "currencyCode": "EUR" }
                                },
                                "lineItems": {
                                    "edges": [ { "node": { "title": "Board", "quantity": 1 } } ]
                                } } }
                ] }
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let handler = handler_for(&server);

    let result = handler
        .execute_tool("get-customer-orders", json!({ "customerId": "207119551" }))
        .await
        .unwrap();

    assert_eq!(result["customer"]["firstName"], "Ada");
    let orders = result["orders"].as_array().unwrap();
    assert_eq!(orders[0]["lineItems"][0]["title"], "Board");
}
