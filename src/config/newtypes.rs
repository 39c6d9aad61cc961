//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated store domain.
///
/// This newtype holds the bare host name of the storefront, e.g.
/// `shop.myshopify.com` or a custom domain like `store.example.com`.
/// Headless storefronts commonly serve the Storefront API from a custom
/// domain, so no `.myshopify.com` suffix is required.
///
/// # Serialization
///
/// `StoreDomain` serializes to and deserializes from the host string:
///
/// ```rust
/// use shopify_ga4_events::StoreDomain;
///
/// let domain = StoreDomain::new("my-store.myshopify.com").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::StoreDomain;
///
/// let domain = StoreDomain::new("store.example.com").unwrap();
/// assert_eq!(domain.as_ref(), "store.example.com");
///
/// // Schemes and paths are rejected; only a host name is accepted
/// assert!(StoreDomain::new("https://store.example.com").is_err());
/// assert!(StoreDomain::new("store.example.com/products").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreDomain(String);

impl StoreDomain {
    /// Creates a new validated store domain.
    ///
    /// The input is trimmed and lowercased. A bare host name is expected:
    /// no scheme, no path, no whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreDomain`] if the domain is empty or
    /// contains anything other than a host name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidStoreDomain { domain });
        }

        let valid = domain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.');
        if !valid || domain.starts_with('.') || domain.ends_with('.') {
            return Err(ConfigError::InvalidStoreDomain { domain });
        }

        Ok(Self(domain))
    }
}

impl AsRef<str> for StoreDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated public storefront access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. Tokenless access is
/// expressed by omitting the token from the configuration, not by an empty
/// token value.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `StorefrontToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::StorefrontToken;
///
/// let token = StorefrontToken::new("my-public-token").unwrap();
/// assert_eq!(token.as_ref(), "my-public-token");
/// assert_eq!(format!("{:?}", token), "StorefrontToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StorefrontToken(String);

impl StorefrontToken {
    /// HTTP header name carrying the token on every Storefront API request.
    pub const HEADER_NAME: &'static str = "X-Shopify-Storefront-Access-Token";

    /// Creates a new validated storefront access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefrontToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyStorefrontToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for StorefrontToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorefrontToken(*****)")
    }
}

/// A validated ISO 4217 currency code.
///
/// Stamped into every GA item built by the helper as the `currency` field.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::CurrencyCode;
///
/// let currency = CurrencyCode::new("EUR").unwrap();
/// assert_eq!(currency.as_ref(), "EUR");
///
/// // Lowercase input is normalized
/// assert_eq!(CurrencyCode::new("usd").unwrap().as_ref(), "USD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new validated currency code.
    ///
    /// The input is uppercased. Exactly three ASCII letters are required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurrencyCode`] if the code is not three
    /// ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let code = code.trim().to_uppercase();

        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidCurrencyCode { code });
        }

        Ok(Self(code))
    }

    /// Returns the default currency code, `USD`.
    #[must_use]
    pub fn usd() -> Self {
        Self("USD".to_string())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
