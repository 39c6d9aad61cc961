//! # Shopify GA4 Events
//!
//! A helper that bridges the Shopify Storefront API with a GA4 analytics
//! data layer: it fetches product variant data over GraphQL, flattens the
//! nested product/variant shape into one record, and appends normalized
//! ecommerce events to an ordered event sink consumed by a tag-management
//! runtime.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HelperConfig`] and [`HelperConfigBuilder`]
//! - Validated newtypes for the store domain, access token, and currency
//! - A minimal Storefront API GraphQL client ([`StorefrontClient`])
//! - A global-ID codec for `gid://` identifiers ([`gid`])
//! - The variant flattener ([`FlatVariant`]) and GA item projection ([`GaItem`])
//! - The [`GaHelper`] facade emitting the eight GA4 ecommerce events
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_ga4_events::{GaHelper, HelperConfig, StoreDomain, StorefrontToken};
//!
//! let config = HelperConfig::builder()
//!     .store_domain(StoreDomain::new("my-store.myshopify.com").unwrap())
//!     .storefront_token(StorefrontToken::new("public-token").unwrap())
//!     .build();
//!
//! let helper = GaHelper::new(config);
//! ```
//!
//! ## Emitting Events
//!
//! ```rust,ignore
//! use shopify_ga4_events::{GaHelper, HelperConfig, ItemPlacement};
//!
//! let helper = GaHelper::new(HelperConfig::default());
//!
//! // Fetches the variant, flattens it, and pushes a `view_item` event
//! helper
//!     .view_item("34641879105581", ItemPlacement::in_list("Homepage"))
//!     .await?;
//!
//! // An already-fetched variant skips the network round trip
//! helper.add_to_cart(variant, 2).await?;
//!
//! // Cart and checkout payloads pass through untransformed
//! helper.begin_checkout(Some(checkout_payload));
//! ```
//!
//! ## Event Sink
//!
//! Events land in an injected, append-only [`EventSink`](events::EventSink).
//! Before an event carrying an `ecommerce` sub-object is appended, a clearing
//! sentinel `{"ecommerce": null}` is appended first so the consuming runtime
//! does not merge stale nested fields. Wire the sink to your page-global
//! `dataLayer` adapter in production; [`MemoryDataLayer`](events::MemoryDataLayer)
//! backs tests and native consumers.
//!
//! ## Design Principles
//!
//! - **No global state**: the sink is injected; configuration is instance-based
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Non-fatal analytics**: a missing variant skips emission without
//!   failing the caller's flow; only transport and GraphQL failures are errors

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod gid;
pub mod helper;
pub mod queries;
pub mod variant;

// Re-export public types at crate root for convenience
pub use client::{GraphqlResponseError, StorefrontClient, StorefrontError};
pub use config::{
    ApiVersion, CurrencyCode, HelperConfig, HelperConfigBuilder, StoreDomain, StorefrontToken,
};
pub use error::ConfigError;
pub use events::{EventName, EventSink, GaItem, ItemPlacement, MemoryDataLayer};
pub use helper::GaHelper;
pub use variant::{FlatVariant, Product, ProductVariant, VariantImage, VariantRef};
