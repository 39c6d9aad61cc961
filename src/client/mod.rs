//! Storefront API client.
//!
//! This module provides the [`StorefrontClient`] for executing GraphQL
//! lookups against the Shopify Storefront API, plus the error types those
//! lookups can surface.

mod errors;
mod storefront;

pub use errors::{GraphqlResponseError, StorefrontError};
pub use storefront::StorefrontClient;
