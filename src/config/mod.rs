//! Configuration types for the GA4 events helper.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HelperConfig`]: The configuration struct holding all helper settings
//! - [`HelperConfigBuilder`]: A builder for constructing [`HelperConfig`] instances
//! - [`StoreDomain`]: A validated storefront host name
//! - [`StorefrontToken`]: A validated storefront access token with masked debug output
//! - [`CurrencyCode`]: A validated ISO 4217 currency code
//! - [`ApiVersion`]: The Storefront API version to call
//!
//! # Example
//!
//! ```rust
//! use shopify_ga4_events::{ApiVersion, HelperConfig, StoreDomain, StorefrontToken};
//!
//! let config = HelperConfig::builder()
//!     .store_domain(StoreDomain::new("my-store.myshopify.com").unwrap())
//!     .storefront_token(StorefrontToken::new("public-token").unwrap())
//!     .api_version(ApiVersion::V2022_07)
//!     .build();
//! ```

mod newtypes;
mod version;

pub use newtypes::{CurrencyCode, StoreDomain, StorefrontToken};
pub use version::ApiVersion;

/// Default storefront host used when none is configured.
const DEFAULT_STORE_DOMAIN: &str = "shops.myshopify.com";

/// Configuration for the GA4 events helper.
///
/// Holds the storefront endpoint settings and event defaults. Configuration
/// is immutable once built; create a new instance to change settings.
///
/// # Thread Safety
///
/// `HelperConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Defaults
///
/// - `store_domain`: `shops.myshopify.com`
/// - `storefront_token`: none (tokenless access)
/// - `currency`: `USD`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `debug`: `false`
#[derive(Clone, Debug)]
pub struct HelperConfig {
    store_domain: StoreDomain,
    storefront_token: Option<StorefrontToken>,
    currency: CurrencyCode,
    api_version: ApiVersion,
    api_host: Option<String>,
    debug: bool,
}

impl HelperConfig {
    /// Creates a new builder for constructing a `HelperConfig`.
    #[must_use]
    pub fn builder() -> HelperConfigBuilder {
        HelperConfigBuilder::new()
    }

    /// Returns the store domain.
    #[must_use]
    pub const fn store_domain(&self) -> &StoreDomain {
        &self.store_domain
    }

    /// Returns the storefront access token, if configured.
    #[must_use]
    pub const fn storefront_token(&self) -> Option<&StorefrontToken> {
        self.storefront_token.as_ref()
    }

    /// Returns the currency code stamped into GA items.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns the Storefront API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API origin override, if configured.
    #[must_use]
    pub fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Returns whether debug event echoing is enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify HelperConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelperConfig>();
};

/// Builder for constructing [`HelperConfig`] instances.
///
/// Every field has a sensible default, so `build()` always succeeds.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::{CurrencyCode, HelperConfig, StoreDomain};
///
/// let config = HelperConfig::builder()
///     .store_domain(StoreDomain::new("store.example.com").unwrap())
///     .currency(CurrencyCode::new("EUR").unwrap())
///     .debug(true)
///     .build();
///
/// assert_eq!(config.currency().as_ref(), "EUR");
/// assert!(config.debug());
/// ```
#[derive(Debug, Default)]
pub struct HelperConfigBuilder {
    store_domain: Option<StoreDomain>,
    storefront_token: Option<StorefrontToken>,
    currency: Option<CurrencyCode>,
    api_version: Option<ApiVersion>,
    api_host: Option<String>,
    debug: Option<bool>,
}

impl HelperConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain.
    #[must_use]
    pub fn store_domain(mut self, domain: StoreDomain) -> Self {
        self.store_domain = Some(domain);
        self
    }

    /// Sets the storefront access token.
    ///
    /// When no token is set the client issues unauthenticated requests,
    /// which the Storefront API permits for a limited feature set.
    #[must_use]
    pub fn storefront_token(mut self, token: StorefrontToken) -> Self {
        self.storefront_token = Some(token);
        self
    }

    /// Sets the currency code stamped into GA items.
    #[must_use]
    pub fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the Storefront API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the origin used to reach the Storefront API.
    ///
    /// The API path stays `/api/{version}/graphql`, but requests go to this
    /// origin (scheme included, e.g. `https://proxy.internal:8443`) instead
    /// of `https://{store_domain}`. Derived product and variant URLs still
    /// use the store domain. Intended for proxy setups and test harnesses.
    #[must_use]
    pub fn api_host(mut self, origin: impl Into<String>) -> Self {
        self.api_host = Some(origin.into());
        self
    }

    /// Enables echoing every pushed event through the diagnostic log.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Builds the [`HelperConfig`].
    ///
    /// All fields default when unset, so this never fails.
    #[must_use]
    pub fn build(self) -> HelperConfig {
        HelperConfig {
            store_domain: self.store_domain.unwrap_or_else(|| {
                StoreDomain::new(DEFAULT_STORE_DOMAIN).expect("default store domain is valid")
            }),
            storefront_token: self.storefront_token,
            currency: self.currency.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            debug: self.debug.unwrap_or(false),
        }
    }
}
