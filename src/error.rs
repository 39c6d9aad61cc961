//! Error types for configuration and validation.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use shopify_ga4_events::{ConfigError, StorefrontToken};
//!
//! let result = StorefrontToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStorefrontToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing helper configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Omit the token for tokenless access instead.")]
    EmptyStorefrontToken,

    /// Store domain is invalid.
    #[error("Invalid store domain '{domain}'. Expected a bare host name such as 'shop.myshopify.com'.")]
    InvalidStoreDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Currency code is invalid.
    #[error("Invalid currency code '{code}'. Expected a three-letter ISO 4217 code such as 'USD'.")]
    InvalidCurrencyCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2022-07') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },
}
