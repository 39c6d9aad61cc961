//! GraphQL client for the Shopify Storefront API.
//!
//! One HTTP POST per lookup to `https://{store}/api/{version}/graphql`, with
//! no caching, retries, or timeouts at this layer — a repeated lookup of the
//! same identifier re-fetches, and retry policy (if wanted) belongs to a
//! caller-provided wrapper.

use serde_json::Value;

use crate::client::errors::{GraphqlResponseError, StorefrontError};
use crate::config::{HelperConfig, StorefrontToken};
use crate::gid::encode_variant_gid;
use crate::queries::{fetch_cart_query, fetch_checkout_query, fetch_variant_query};
use crate::variant::ProductVariant;

/// GraphQL client for the Shopify Storefront API.
///
/// Issues lookups with the configured access token and API version. The
/// client holds no per-request state and is safe to share across async tasks.
///
/// # Authentication
///
/// When a [`StorefrontToken`] is configured, every request carries it in the
/// `X-Shopify-Storefront-Access-Token` header. Without a token the endpoint
/// still serves a limited feature set.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_ga4_events::{HelperConfig, StorefrontClient};
/// use serde_json::json;
///
/// let client = StorefrontClient::new(&HelperConfig::default());
/// let variant = client.fetch_variant("34641879105581").await?;
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full GraphQL endpoint URL, e.g. `https://shop.example.com/api/2022-07/graphql`.
    endpoint: String,
    /// Optional storefront access token.
    token: Option<StorefrontToken>,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a new Storefront client from helper configuration.
    #[must_use]
    pub fn new(config: &HelperConfig) -> Self {
        // api_host covers proxy setups; the API path is the same either way
        let origin = config.api_host().map_or_else(
            || format!("https://{}", config.store_domain().as_ref()),
            ToString::to_string,
        );
        let endpoint = format!("{origin}/api/{}/graphql", config.api_version());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            token: config.storefront_token().cloned(),
        }
    }

    /// Returns the GraphQL endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a GraphQL query and returns the response's `data` field.
    ///
    /// Sends a single POST with body `{query, variables}` and the JSON
    /// `Accept`/`Content-Type` headers, plus the access token header when
    /// one is configured.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Http`] for transport failures or a non-JSON body.
    /// - [`StorefrontError::Graphql`] when the response carries a non-empty
    ///   `errors` field; the error preserves both the error list and the
    ///   originating request payload.
    pub async fn query(&self, query: &str, variables: Value) -> Result<Value, StorefrontError> {
        let request = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        tracing::debug!(endpoint = %self.endpoint, "querying storefront api");

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        if let Some(token) = &self.token {
            builder = builder.header(StorefrontToken::HEADER_NAME, token.as_ref());
        }

        let response = builder.json(&request).send().await?;
        let mut body: Value = response.json().await?;

        if let Some(errors) = body.get("errors") {
            let empty_list = errors.as_array().is_some_and(Vec::is_empty);
            if !errors.is_null() && !empty_list {
                return Err(GraphqlResponseError {
                    errors: errors.clone(),
                    request,
                }
                .into());
            }
        }

        Ok(body
            .get_mut("data")
            .map_or(Value::Null, Value::take))
    }

    /// Fetches a product variant by its simple or global ID.
    ///
    /// An empty ID short-circuits to `Ok(None)` without a network call. The
    /// ID is otherwise encoded as a base64 `gid://shopify/ProductVariant/...`
    /// global ID and looked up with the variant query document.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] from [`query`](Self::query), plus
    /// [`StorefrontError::Decode`] when the returned node does not match the
    /// variant fragment shape.
    pub async fn fetch_variant(
        &self,
        variant_id: &str,
    ) -> Result<Option<ProductVariant>, StorefrontError> {
        if variant_id.is_empty() {
            return Ok(None);
        }

        let variables = serde_json::json!({ "id": encode_variant_gid(variant_id) });
        let data = self.query(&fetch_variant_query(), variables).await?;

        match data.get("node") {
            None | Some(Value::Null) => Ok(None),
            Some(node) => Ok(Some(serde_json::from_value(node.clone())?)),
        }
    }

    /// Fetches a cart by its global ID, returning the raw node payload.
    ///
    /// The payload is left untyped: it feeds the passthrough cart events,
    /// which forward it to the data layer untransformed.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] from [`query`](Self::query).
    pub async fn fetch_cart(&self, cart_id: &str) -> Result<Option<Value>, StorefrontError> {
        self.fetch_node(&fetch_cart_query(), cart_id).await
    }

    /// Fetches a checkout by its global ID, returning the raw node payload.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] from [`query`](Self::query).
    pub async fn fetch_checkout(&self, checkout_id: &str) -> Result<Option<Value>, StorefrontError> {
        self.fetch_node(&fetch_checkout_query(), checkout_id).await
    }

    /// Shared node lookup for the untyped cart/checkout documents.
    async fn fetch_node(&self, query: &str, id: &str) -> Result<Option<Value>, StorefrontError> {
        if id.is_empty() {
            return Ok(None);
        }

        let mut data = self.query(query, serde_json::json!({ "id": id })).await?;

        match data.get_mut("node") {
            None | Some(Value::Null) => Ok(None),
            Some(node) => Ok(Some(node.take())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, StoreDomain};

    #[test]
    fn test_endpoint_construction() {
        let config = HelperConfig::builder()
            .store_domain(StoreDomain::new("my-store.myshopify.com").unwrap())
            .api_version(ApiVersion::V2021_10)
            .build();
        let client = StorefrontClient::new(&config);

        assert_eq!(
            client.endpoint(),
            "https://my-store.myshopify.com/api/2021-10/graphql"
        );
    }

    #[test]
    fn test_endpoint_uses_configured_version() {
        let config = HelperConfig::builder()
            .api_version(ApiVersion::Custom("2023-01".to_string()))
            .build();
        let client = StorefrontClient::new(&config);

        assert!(client.endpoint().contains("/api/2023-01/"));
    }

    #[test]
    fn test_api_host_override_replaces_origin() {
        let config = HelperConfig::builder()
            .api_host("http://127.0.0.1:8080")
            .build();
        let client = StorefrontClient::new(&config);

        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:8080/api/2022-07/graphql"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontClient>();
    }

    #[tokio::test]
    async fn test_fetch_variant_empty_id_short_circuits() {
        // No server is running; an empty ID must resolve without a request.
        let client = StorefrontClient::new(&HelperConfig::default());
        let result = client.fetch_variant("").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_cart_empty_id_short_circuits() {
        let client = StorefrontClient::new(&HelperConfig::default());
        assert!(client.fetch_cart("").await.unwrap().is_none());
        assert!(client.fetch_checkout("").await.unwrap().is_none());
    }
}
