//! Product variant shapes and the flattener.
//!
//! The Storefront API returns a nested variant record (variant fields plus a
//! nested product). Analytics events want a single flat record, so
//! [`FlatVariant`] merges both levels and derives the product and variant
//! URLs. Flattening is pure: the same input always produces the same output.

use serde::{Deserialize, Serialize};

use crate::config::StoreDomain;
use crate::gid::decode_id;

/// A product variant as returned by the Storefront API.
///
/// Matches the shared variant fragment in [`crate::queries`]. The nested
/// `product` record is always present on a well-formed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Global ID of the variant.
    pub id: String,
    /// Stock keeping unit, when the merchant assigns one.
    #[serde(default)]
    pub sku: Option<String>,
    /// Variant title, e.g. `Red / M`.
    pub title: String,
    /// Price as a decimal string (precision preserved).
    pub price: String,
    /// Pre-discount price, when the variant is on sale.
    #[serde(default)]
    pub compare_at_price: Option<String>,
    /// Primary variant image.
    #[serde(default)]
    pub image: Option<VariantImage>,
    /// The parent product.
    pub product: Product,
}

/// Image reference on a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantImage {
    /// URL of the original (un-transformed) image.
    #[serde(default)]
    pub original_src: Option<String>,
}

/// Product-level fields nested inside a variant response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Global ID of the product.
    pub id: String,
    /// Product title.
    pub title: String,
    /// URL handle, e.g. `red-shirt`.
    pub handle: String,
    /// Merchant-defined product type.
    #[serde(default)]
    pub product_type: String,
    /// Product vendor (brand).
    #[serde(default)]
    pub vendor: String,
}

/// An opaque reference to a product variant.
///
/// Callers either hold a raw identifier (simple numeric string or encoded
/// global ID) or a variant record they already fetched. The tagged union
/// replaces runtime duck-typing at the facade boundary: a resolved record
/// short-circuits the network lookup but still flows through the flattener.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::VariantRef;
///
/// let by_id: VariantRef = "34641879105581".into();
/// let by_number: VariantRef = 34_641_879_105_581u64.into();
/// assert!(matches!(by_id, VariantRef::Id(_)));
/// assert!(matches!(by_number, VariantRef::Id(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VariantRef {
    /// A variant identifier to resolve through the Storefront API.
    Id(String),
    /// An already-fetched variant record.
    Resolved(Box<ProductVariant>),
}

impl From<&str> for VariantRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for VariantRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for VariantRef {
    fn from(id: u64) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<ProductVariant> for VariantRef {
    fn from(variant: ProductVariant) -> Self {
        Self::Resolved(Box::new(variant))
    }
}

/// A denormalized variant record: product- and variant-level fields merged,
/// with derived URLs.
///
/// Constructed fresh on every call via [`FlatVariant::from_variant`] and used
/// as the common input to all analytics event builders. Decoded IDs are
/// `Option`: a malformed global ID yields `None` rather than a junk value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatVariant {
    /// Decoded product ID.
    pub product_id: Option<String>,
    /// Product title.
    pub product_title: String,
    /// `"{product title} - {variant title}"`.
    pub product_variant_title: String,
    /// Merchant-defined product type.
    pub product_type: String,
    /// Product vendor (brand).
    pub product_vendor: String,
    /// `https://{store}/products/{handle}`.
    pub product_url: String,
    /// Stock keeping unit, when assigned.
    pub sku: Option<String>,
    /// Price as a decimal string.
    pub price: String,
    /// Pre-discount price, when on sale.
    pub compare_at_price: Option<String>,
    /// Decoded variant ID.
    pub variant_id: Option<String>,
    /// Variant title.
    pub variant_title: String,
    /// URL of the variant image, when one exists.
    pub variant_image: Option<String>,
    /// `{product_url}?variant={variant_id}`; the parameter is omitted when
    /// the variant ID fails to decode.
    pub variant_url: String,
}

impl FlatVariant {
    /// Flattens a nested variant record against the given store domain.
    ///
    /// Pure over well-formed input: calling twice with the same arguments
    /// yields equal output.
    #[must_use]
    pub fn from_variant(variant: &ProductVariant, store: &StoreDomain) -> Self {
        let product = &variant.product;
        let product_url = format!("https://{}/products/{}", store.as_ref(), product.handle);
        let variant_id = decode_id(&variant.id);

        let variant_url = variant_id.as_ref().map_or_else(
            || product_url.clone(),
            |id| format!("{product_url}?variant={id}"),
        );

        Self {
            // Product level info
            product_id: decode_id(&product.id),
            product_title: product.title.clone(),
            product_variant_title: format!("{} - {}", product.title, variant.title),
            product_type: product.product_type.clone(),
            product_vendor: product.vendor.clone(),
            product_url,
            // Variant level data
            sku: variant.sku.clone(),
            price: variant.price.clone(),
            compare_at_price: variant.compare_at_price.clone(),
            variant_id,
            variant_title: variant.title.clone(),
            variant_image: variant
                .image
                .as_ref()
                .and_then(|image| image.original_src.clone()),
            variant_url,
        }
    }
}
