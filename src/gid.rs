//! Global ID codec for Storefront API identifiers.
//!
//! The Storefront API identifies entities with opaque global IDs of the form
//! `gid://shopify/ProductVariant/34641879105581`, often transported as the
//! base64 encoding of that string. Analytics payloads only want the trailing
//! numeric token, so this module converts between the two shapes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Scheme prefix carried by every un-encoded global ID.
const GID_PREFIX: &str = "gid://";

/// Extracts the trailing token from a global ID.
///
/// Accepts three input shapes:
///
/// - an already-simple numeric ID, returned unchanged;
/// - a `gid://` string, from which the part after the final `/` is returned;
/// - a base64 encoding of a `gid://` string, decoded first.
///
/// Returns `None` for malformed input: invalid base64, non-UTF-8 decode
/// output, or a decoded string with no `/` separator. Callers treat `None`
/// as "no usable ID", distinct from a valid empty value.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::gid::decode_id;
///
/// assert_eq!(decode_id("34641879105581").as_deref(), Some("34641879105581"));
/// assert_eq!(
///     decode_id("gid://shopify/ProductVariant/34641879105581").as_deref(),
///     Some("34641879105581")
/// );
/// assert_eq!(decode_id("not base64!").as_deref(), None);
/// ```
#[must_use]
pub fn decode_id(id: &str) -> Option<String> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        // Already a simple ID
        return Some(id.to_string());
    }

    let gid = if id.starts_with(GID_PREFIX) {
        id.to_string()
    } else {
        let bytes = BASE64.decode(id).ok()?;
        String::from_utf8(bytes).ok()?
    };

    match gid.rsplit_once('/') {
        Some((_, token)) if !token.is_empty() => Some(token.to_string()),
        _ => None,
    }
}

/// Encodes a simple variant ID as a base64 global ID.
///
/// This is the wire form the Storefront API `node(id:)` lookup expects.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::gid::{decode_id, encode_variant_gid};
///
/// let encoded = encode_variant_gid("12345");
/// assert_eq!(decode_id(&encoded).as_deref(), Some("12345"));
/// ```
#[must_use]
pub fn encode_variant_gid(variant_id: &str) -> String {
    BASE64.encode(format!("gid://shopify/ProductVariant/{variant_id}"))
}
