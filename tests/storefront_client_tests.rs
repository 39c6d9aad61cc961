//! Integration tests for the Storefront API client.
//!
//! These tests run the client against a mock GraphQL endpoint and verify the
//! request shape, data extraction, and error handling behavior.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_ga4_events::gid::encode_variant_gid;
use shopify_ga4_events::{
    ApiVersion, HelperConfig, StoreDomain, StorefrontClient, StorefrontError, StorefrontToken,
};

/// Creates a client pointed at the mock server.
fn mock_client(server: &MockServer, token: Option<&str>) -> StorefrontClient {
    let mut builder = HelperConfig::builder()
        .store_domain(StoreDomain::new("test-shop.myshopify.com").unwrap())
        .api_version(ApiVersion::V2022_07)
        .api_host(server.uri());

    if let Some(token) = token {
        builder = builder.storefront_token(StorefrontToken::new(token).unwrap());
    }

    StorefrontClient::new(&builder.build())
}

/// A well-formed variant node as the Storefront API returns it.
fn variant_node() -> serde_json::Value {
    json!({
        "id": "gid://shopify/ProductVariant/12345",
        "sku": "ABC",
        "title": "Red / M",
        "price": "9.99",
        "compareAtPrice": "14.99",
        "image": { "originalSrc": "https://cdn.example.com/shirt-red.jpg" },
        "product": {
            "id": "gid://shopify/Product/111222333",
            "title": "Shirt",
            "handle": "shirt",
            "productType": "Apparel",
            "vendor": "Acme"
        }
    })
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_query_posts_to_versioned_graphql_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2022-07/graphql"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"shop": {}}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let data = client
        .query("query { shop { name } }", json!(null))
        .await
        .unwrap();

    assert_eq!(data, json!({"shop": {}}));
}

#[tokio::test]
async fn test_query_sends_access_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Shopify-Storefront-Access-Token", "public-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some("public-token"));
    client.query("query { shop { name } }", json!(null)).await.unwrap();
}

#[tokio::test]
async fn test_query_body_carries_query_and_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "query": "query($id: ID!) { node(id: $id) { id } }",
            "variables": { "id": "abc" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"node": null}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    client
        .query(
            "query($id: ID!) { node(id: $id) { id } }",
            json!({"id": "abc"}),
        )
        .await
        .unwrap();
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_graphql_errors_surface_with_request_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Invalid global id 'bogus'"}]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let result = client.query("query { broken }", json!({"id": "bogus"})).await;

    match result {
        Err(StorefrontError::Graphql(error)) => {
            assert!(error.errors[0]["message"]
                .as_str()
                .unwrap()
                .contains("Invalid global id"));
            assert_eq!(error.request["query"], "query { broken }");
            assert_eq!(error.request["variables"]["id"], "bogus");
        }
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_errors_array_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"shop": {"name": "Test"}},
            "errors": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let data = client.query("query { shop { name } }", json!(null)).await.unwrap();

    assert_eq!(data["shop"]["name"], "Test");
}

#[tokio::test]
async fn test_non_json_response_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let result = client.query("query { shop { name } }", json!(null)).await;

    assert!(matches!(result, Err(StorefrontError::Http(_))));
}

// ============================================================================
// Variant Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_variant_encodes_global_id_and_deserializes_node() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "id": encode_variant_gid("12345") }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"node": variant_node()}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let variant = client.fetch_variant("12345").await.unwrap().unwrap();

    assert_eq!(variant.sku.as_deref(), Some("ABC"));
    assert_eq!(variant.title, "Red / M");
    assert_eq!(variant.product.title, "Shirt");
    assert_eq!(variant.product.handle, "shirt");
}

#[tokio::test]
async fn test_fetch_variant_null_node_resolves_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"node": null}})))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    assert!(client.fetch_variant("99999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_fetch_variant_empty_id_issues_no_request() {
    let server = MockServer::start().await;

    // Any request reaching the server would fail the mock expectation
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    assert!(client.fetch_variant("").await.unwrap().is_none());
}

// ============================================================================
// Cart & Checkout Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_cart_returns_raw_node_payload() {
    let server = MockServer::start().await;

    let cart = json!({
        "id": "gid://shopify/Cart/abc",
        "webUrl": "https://test-shop.myshopify.com/checkout",
        "estimatedCost": {
            "subtotalAmount": {"amount": "19.98"},
            "totalAmount": {"amount": "21.50"}
        }
    });

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "id": "gid://shopify/Cart/abc" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"node": cart.clone()}})),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let payload = client.fetch_cart("gid://shopify/Cart/abc").await.unwrap();

    assert_eq!(payload, Some(cart));
}

#[tokio::test]
async fn test_fetch_checkout_null_node_resolves_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"node": null}})))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let payload = client
        .fetch_checkout("gid://shopify/Checkout/gone")
        .await
        .unwrap();

    assert!(payload.is_none());
}
