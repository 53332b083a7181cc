//! Integration tests for `StorefrontClient::fetch_product_page`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers both upstream response shapes and every
//! error variant the fetch can produce.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_client::{StorefrontClient, StorefrontError};
use shopfront_core::WidgetConfig;

const GRAPHQL_PATH: &str = "/api/2024-01/graphql.json";

fn widget_config(handle: &str) -> WidgetConfig {
    WidgetConfig {
        shop_domain: "my-shop.myshopify.com".to_string(),
        storefront_token: "shpat-test-token".to_string(),
        collection_handle: handle.to_string(),
        api_version: "2024-01".to_string(),
        page_size: 12,
        request_timeout_secs: 5,
        user_agent: "shopfront-test/0.1".to_string(),
        log_level: "info".to_string(),
    }
}

fn test_client(server: &MockServer, handle: &str) -> StorefrontClient {
    StorefrontClient::with_base_url(&widget_config(handle), &server.uri())
        .expect("failed to build test StorefrontClient")
}

/// One product node in the GraphQL connection shape.
fn product_node(id: u32, title: &str, amount: &str, vendor: &str) -> serde_json::Value {
    json!({
        "node": {
            "id": format!("gid://shopify/Product/{id}"),
            "title": title,
            "handle": title.to_lowercase().replace(' ', "-"),
            "productType": "Beverages",
            "vendor": vendor,
            "priceRange": {
                "minVariantPrice": { "amount": amount, "currencyCode": "USD" }
            },
            "images": {
                "edges": [
                    { "node": { "url": format!("https://cdn.example.com/{id}.jpg"), "altText": null } }
                ]
            }
        }
    })
}

fn collection_envelope(products: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "data": {
            "collectionByHandle": {
                "id": "gid://shopify/Collection/9",
                "title": "Summer Drinks",
                "products": {
                    "edges": products,
                    "pageInfo": { "hasNextPage": true, "endCursor": "CURSOR123" }
                }
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Happy paths — both upstream shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn named_collection_fetch_normalizes_products_and_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Storefront-Access-Token", "shpat-test-token"))
        .and(body_partial_json(
            json!({"variables": {"handle": "summer-drinks", "first": 12, "after": null}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_envelope(vec![
            product_node(1, "Ginger Fizz", "4.99", "CANN"),
            product_node(2, "Blood Orange", "7.50", "BREZ"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, "summer-drinks");
    let page = client.fetch_product_page(None).await.unwrap();

    assert_eq!(page.id, "gid://shopify/Collection/9");
    assert_eq!(page.title, "Summer Drinks");
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.products[0].title, "Ginger Fizz");
    assert_eq!(page.products[0].price.amount, "4.99".parse().unwrap());
    assert_eq!(page.products[1].vendor, "BREZ");
    assert!(page.page_info.has_next_page);
    assert_eq!(page.page_info.end_cursor.as_deref(), Some("CURSOR123"));
}

#[tokio::test]
async fn all_products_fetch_uses_root_connection_and_synthetic_identity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(
            json!({"variables": {"first": 12, "after": null}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": {
                    "edges": [ product_node(1, "Ginger Fizz", "4.99", "CANN") ],
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, "all");
    let page = client.fetch_product_page(None).await.unwrap();

    assert_eq!(page.id, "all-products");
    assert_eq!(page.title, "All Products");
    assert_eq!(page.products.len(), 1);
    assert!(!page.page_info.has_next_page);
    assert!(page.page_info.end_cursor.is_none());
}

#[tokio::test]
async fn after_cursor_is_forwarded_in_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(
            json!({"variables": {"first": 12, "after": "CURSOR123"}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "products": {
                    "edges": [],
                    "pageInfo": { "hasNextPage": false, "endCursor": null }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, "all");
    let page = client.fetch_product_page(Some("CURSOR123")).await.unwrap();
    assert!(page.products.is_empty());
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server, "all");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::Transport { status: 502 })),
        "expected Transport(502), got: {result:?}"
    );
}

#[tokio::test]
async fn graphql_errors_list_surfaces_first_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Invalid access token" },
                { "message": "second error" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server, "summer-drinks");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::Upstream(ref m)) if m == "Invalid access token"),
        "expected Upstream(Invalid access token), got: {result:?}"
    );
}

#[tokio::test]
async fn missing_named_collection_is_not_found_not_an_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"collectionByHandle": null}})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server, "does-not-exist");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::NotFound { ref handle }) if handle == "does-not-exist"),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_price_amount_fails_the_page_parse() {
    let server = MockServer::start().await;

    let mut node = product_node(1, "Broken", "4.99", "CANN");
    node["node"]["priceRange"]["minVariantPrice"]["amount"] = json!("not-a-price");

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_envelope(vec![node])))
        .mount(&server)
        .await;

    let client = test_client(&server, "summer-drinks");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::Deserialize { .. })),
        "expected Deserialize for malformed price, got: {result:?}"
    );
}

#[tokio::test]
async fn body_with_neither_data_nor_errors_is_an_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server, "all");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::Upstream(_))),
        "expected Upstream for empty envelope, got: {result:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&server)
        .await;

    let client = test_client(&server, "all");
    let result = client.fetch_product_page(None).await;

    assert!(
        matches!(result, Err(StorefrontError::Deserialize { .. })),
        "expected Deserialize for non-JSON body, got: {result:?}"
    );
}
