//! Error types for Storefront API operations.
//!
//! # Error Handling
//!
//! Two failure shapes exist at this layer:
//!
//! - [`StorefrontError::Http`]: transport-level failures from the underlying
//!   HTTP client (connection errors, non-JSON bodies).
//! - [`StorefrontError::Graphql`]: the endpoint answered HTTP 200 but the
//!   response body carried an `errors` field. The raw error list and the
//!   originating request payload are preserved for diagnostics.
//!
//! A missing entity is not an error: lookups return `Ok(None)` when the
//! queried node does not exist.

use serde_json::Value;
use thiserror::Error;

/// Error type for Storefront API operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A transport-level error occurred (connection, TLS, body decode).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body carried a GraphQL `errors` field.
    #[error(transparent)]
    Graphql(#[from] GraphqlResponseError),

    /// A response payload could not be deserialized into the expected shape.
    #[error("failed to decode storefront response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A GraphQL-level failure reported inside an otherwise successful response.
///
/// Carries the serialized error list and the request payload that produced
/// it, so callers can surface both to a monitoring layer.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::client::GraphqlResponseError;
/// use serde_json::json;
///
/// let error = GraphqlResponseError {
///     errors: json!([{"message": "Invalid global id"}]),
///     request: json!({"query": "...", "variables": {"id": "bogus"}}),
/// };
/// assert!(error.to_string().contains("Invalid global id"));
/// ```
#[derive(Debug, Error)]
#[error("Storefront API returned GraphQL errors: {errors}")]
pub struct GraphqlResponseError {
    /// The raw `errors` value from the response body.
    pub errors: Value,
    /// The request payload (`{query, variables}`) that produced the errors.
    pub request: Value,
}
