//! Analytics event shapes and the dispatch pipeline.
//!
//! Events follow the GA4 ecommerce schema: an entry with an `event` name and
//! an `ecommerce` sub-object holding `items` or a passthrough cart payload.
//! Before any entry carrying `ecommerce` lands in the sink, a clearing
//! sentinel `{"ecommerce": null}` is appended so the consuming tag runtime
//! does not merge stale nested fields from the previous event.

mod sink;

pub use sink::{EventSink, MemoryDataLayer};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CurrencyCode;
use crate::variant::FlatVariant;

/// GA4 ecommerce event names emitted by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// An item became visible to the shopper.
    ViewItem,
    /// The shopper clicked through to an item.
    SelectItem,
    /// A list of items was presented.
    ViewItemList,
    /// Item quantity in the cart increased.
    AddToCart,
    /// Item quantity in the cart decreased.
    RemoveFromCart,
    /// The cart was viewed.
    ViewCart,
    /// Checkout started.
    BeginCheckout,
    /// An order completed.
    Purchase,
}

impl EventName {
    /// Returns the wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewItem => "view_item",
            Self::SelectItem => "select_item",
            Self::ViewItemList => "view_item_list",
            Self::AddToCart => "add_to_cart",
            Self::RemoveFromCart => "remove_from_cart",
            Self::ViewCart => "view_cart",
            Self::BeginCheckout => "begin_checkout",
            Self::Purchase => "purchase",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GA4 product field object: one entry of an event's `items` array.
///
/// `item_id` prefers the SKU and falls back to the decoded variant ID; when
/// neither exists the field is omitted from the serialized item. The
/// positional fields (`index`, `item_list_name`, `quantity`) are present only
/// on the events that carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaItem {
    /// ISO 4217 currency code for `price`.
    pub currency: String,
    /// SKU, or decoded variant ID when no SKU is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Combined product and variant title.
    pub item_name: String,
    /// Product vendor.
    pub item_brand: String,
    /// Merchant-defined product type.
    pub item_category: String,
    /// Variant title.
    pub item_variant: String,
    /// Price as a decimal string.
    pub price: String,
    /// 0-based position within a presented list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Name of the list the item was presented in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_name: Option<String>,
    /// Quantity delta for cart events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl GaItem {
    /// Projects a flat variant into the GA4 item field set.
    #[must_use]
    pub fn from_flat_variant(flat: &FlatVariant, currency: &CurrencyCode) -> Self {
        Self {
            currency: currency.as_ref().to_string(),
            item_id: flat.sku.clone().or_else(|| flat.variant_id.clone()),
            item_name: flat.product_variant_title.clone(),
            item_brand: flat.product_vendor.clone(),
            item_category: flat.product_type.clone(),
            item_variant: flat.variant_title.clone(),
            price: flat.price.clone(),
            index: None,
            item_list_name: None,
            quantity: None,
        }
    }
}

/// Placement of an item within a presented list.
///
/// The original browser helper derived a missing position by walking an
/// element's preceding siblings; that DOM traversal is a rendering-layer
/// concern, so here the position is explicit and defaults to `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPlacement {
    /// Name of the list, emitted as `item_list_name` when present.
    pub list: Option<String>,
    /// 0-based position, emitted as `index`. Defaults to `0` when unset.
    pub position: Option<u32>,
}

impl ItemPlacement {
    /// Placement within a named list.
    #[must_use]
    pub fn in_list(list: impl Into<String>) -> Self {
        Self {
            list: Some(list.into()),
            position: None,
        }
    }

    /// Sets the explicit position.
    #[must_use]
    pub const fn at_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }
}

/// Appends one event to the sink, preceded by a clearing sentinel when the
/// payload carries an `ecommerce` sub-object.
///
/// The clear-then-set pair is appended back to back; cooperative execution
/// means no other event's pair can interleave. With `debug` set, the event
/// name and payload are echoed through the diagnostic log.
pub(crate) fn push_event(sink: &dyn EventSink, debug: bool, name: EventName, payload: Value) {
    if debug {
        tracing::info!(event = %name, payload = %payload, "pushing data layer event");
    }

    if payload.get("ecommerce").is_some() {
        sink.push(serde_json::json!({ "ecommerce": null }));
    }

    let mut entry = serde_json::Map::new();
    entry.insert("event".to_string(), Value::String(name.as_str().to_string()));
    if let Value::Object(fields) = payload {
        entry.extend(fields);
    }

    sink.push(Value::Object(entry));
}
