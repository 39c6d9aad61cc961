//! Public facade composing the client, flattener, and event dispatcher.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{StorefrontClient, StorefrontError};
use crate::config::{CurrencyCode, HelperConfig, StoreDomain};
use crate::events::{push_event, EventName, EventSink, GaItem, ItemPlacement, MemoryDataLayer};
use crate::variant::{FlatVariant, VariantRef};

/// Bridges Storefront API product data into GA4 data layer events.
///
/// One instance holds the configuration for its lifetime; nothing is mutated
/// after construction. Each event operation resolves its variant reference
/// (fetching at most once), flattens it, and appends the resulting event to
/// the sink.
///
/// # Return values
///
/// Event operations return `Ok(true)` when an event was appended and
/// `Ok(false)` when emission was skipped — a missing variant or an empty
/// payload. A skipped event is logged but never fails the caller's flow; only
/// transport and GraphQL failures surface as `Err`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_ga4_events::{
///     GaHelper, HelperConfig, ItemPlacement, StoreDomain, StorefrontToken,
/// };
///
/// let config = HelperConfig::builder()
///     .store_domain(StoreDomain::new("my-store.myshopify.com")?)
///     .storefront_token(StorefrontToken::new("public-token")?)
///     .build();
/// let helper = GaHelper::new(config);
///
/// helper
///     .view_item("34641879105581", ItemPlacement::in_list("Homepage"))
///     .await?;
/// helper.add_to_cart("34641879105581", 2).await?;
/// ```
pub struct GaHelper {
    client: StorefrontClient,
    sink: Arc<dyn EventSink>,
    store_domain: StoreDomain,
    currency: CurrencyCode,
    debug: bool,
}

// Verify GaHelper is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GaHelper>();
};

impl GaHelper {
    /// Creates a helper with a private in-memory data layer.
    ///
    /// Useful for development with the `debug` flag; deployments that feed a
    /// real tag-management runtime should inject their sink adapter via
    /// [`with_sink`](Self::with_sink).
    #[must_use]
    pub fn new(config: HelperConfig) -> Self {
        Self::with_sink(config, Arc::new(MemoryDataLayer::new()))
    }

    /// Creates a helper that appends events to the given sink.
    #[must_use]
    pub fn with_sink(config: HelperConfig, sink: Arc<dyn EventSink>) -> Self {
        let client = StorefrontClient::new(&config);
        Self {
            client,
            sink,
            store_domain: config.store_domain().clone(),
            currency: config.currency().clone(),
            debug: config.debug(),
        }
    }

    /// Returns the underlying storefront client.
    #[must_use]
    pub const fn client(&self) -> &StorefrontClient {
        &self.client
    }

    /// Emits a `view_item` event for one variant.
    ///
    /// The item carries an `index` (the placement position, defaulting to
    /// `0`) and, when the placement names a list, an `item_list_name`.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] when the variant lookup fails.
    pub async fn view_item(
        &self,
        variant: impl Into<VariantRef>,
        placement: ItemPlacement,
    ) -> Result<bool, StorefrontError> {
        self.item_event(EventName::ViewItem, variant.into(), placement)
            .await
    }

    /// Emits a `select_item` event for one variant.
    ///
    /// Same payload shape as [`view_item`](Self::view_item).
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] when the variant lookup fails.
    pub async fn select_item(
        &self,
        variant: impl Into<VariantRef>,
        placement: ItemPlacement,
    ) -> Result<bool, StorefrontError> {
        self.item_event(EventName::SelectItem, variant.into(), placement)
            .await
    }

    /// Emits a `view_item_list` event with caller-supplied items.
    ///
    /// The items are forwarded untransformed. An empty list emits nothing
    /// and returns `false`.
    pub fn view_item_list(&self, items: Vec<GaItem>) -> bool {
        if items.is_empty() {
            return false;
        }

        self.push(
            EventName::ViewItemList,
            serde_json::json!({ "ecommerce": { "items": items } }),
        );
        true
    }

    /// Emits an `add_to_cart` event for a positive quantity change.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] when the variant lookup fails.
    pub async fn add_to_cart(
        &self,
        variant: impl Into<VariantRef>,
        quantity: u32,
    ) -> Result<bool, StorefrontError> {
        self.quantity_event(EventName::AddToCart, variant.into(), quantity)
            .await
    }

    /// Emits a `remove_from_cart` event for a negative quantity change.
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontError`] when the variant lookup fails.
    pub async fn remove_from_cart(
        &self,
        variant: impl Into<VariantRef>,
        quantity: u32,
    ) -> Result<bool, StorefrontError> {
        self.quantity_event(EventName::RemoveFromCart, variant.into(), quantity)
            .await
    }

    /// Emits a `view_cart` event with a passthrough cart payload.
    ///
    /// The payload lands untransformed inside `ecommerce`. A missing or null
    /// payload emits nothing and returns `false`.
    pub fn view_cart(&self, cart_payload: Option<Value>) -> bool {
        self.passthrough_event(EventName::ViewCart, cart_payload)
    }

    /// Emits a `begin_checkout` event with a passthrough checkout payload.
    pub fn begin_checkout(&self, checkout_payload: Option<Value>) -> bool {
        self.passthrough_event(EventName::BeginCheckout, checkout_payload)
    }

    /// Emits a `purchase` event with a passthrough order payload.
    pub fn purchase(&self, order_payload: Option<Value>) -> bool {
        self.passthrough_event(EventName::Purchase, order_payload)
    }

    /// Resolves a variant reference to a flat record.
    ///
    /// A resolved reference skips the network entirely; an identifier is
    /// fetched through the client. A reference that resolves to nothing is
    /// logged and reported as `Ok(None)` — callers skip event emission
    /// without failing their broader flow.
    async fn get_flat_variant(
        &self,
        variant: VariantRef,
    ) -> Result<Option<FlatVariant>, StorefrontError> {
        let resolved = match variant {
            VariantRef::Resolved(variant) => Some(*variant),
            VariantRef::Id(id) => {
                let fetched = self.client.fetch_variant(&id).await?;
                if fetched.is_none() {
                    tracing::warn!(variant_id = %id, "variant not found");
                }
                fetched
            }
        };

        Ok(resolved.map(|variant| FlatVariant::from_variant(&variant, &self.store_domain)))
    }

    /// Shared path for `view_item` / `select_item`.
    async fn item_event(
        &self,
        name: EventName,
        variant: VariantRef,
        placement: ItemPlacement,
    ) -> Result<bool, StorefrontError> {
        let Some(flat) = self.get_flat_variant(variant).await? else {
            return Ok(false);
        };

        let mut item = GaItem::from_flat_variant(&flat, &self.currency);
        item.index = Some(placement.position.unwrap_or(0));
        item.item_list_name = placement.list;

        self.push(name, serde_json::json!({ "ecommerce": { "items": [item] } }));
        Ok(true)
    }

    /// Shared path for `add_to_cart` / `remove_from_cart`.
    async fn quantity_event(
        &self,
        name: EventName,
        variant: VariantRef,
        quantity: u32,
    ) -> Result<bool, StorefrontError> {
        let Some(flat) = self.get_flat_variant(variant).await? else {
            return Ok(false);
        };

        let mut item = GaItem::from_flat_variant(&flat, &self.currency);
        item.quantity = Some(quantity);

        self.push(name, serde_json::json!({ "ecommerce": { "items": [item] } }));
        Ok(true)
    }

    /// Shared path for the passthrough cart/checkout/purchase events.
    fn passthrough_event(&self, name: EventName, payload: Option<Value>) -> bool {
        let Some(payload) = payload else {
            return false;
        };
        if payload.is_null() {
            return false;
        }

        self.push(name, serde_json::json!({ "ecommerce": payload }));
        true
    }

    fn push(&self, name: EventName, payload: Value) {
        push_event(self.sink.as_ref(), self.debug, name, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Product, ProductVariant, VariantImage};
    use serde_json::json;

    fn sample_variant() -> ProductVariant {
        ProductVariant {
            id: "gid://shopify/ProductVariant/34641879105581".to_string(),
            sku: Some("ABC".to_string()),
            title: "Red / M".to_string(),
            price: "9.99".to_string(),
            compare_at_price: None,
            image: None,
            product: Product {
                id: "gid://shopify/Product/111222333".to_string(),
                title: "Shirt".to_string(),
                handle: "shirt".to_string(),
                product_type: "Apparel".to_string(),
                vendor: "Acme".to_string(),
            },
        }
    }

    fn helper_with_layer() -> (GaHelper, Arc<MemoryDataLayer>) {
        let layer = Arc::new(MemoryDataLayer::new());
        let helper = GaHelper::with_sink(HelperConfig::default(), layer.clone());
        (helper, layer)
    }

    #[tokio::test]
    async fn test_view_item_with_resolved_variant_skips_fetch() {
        // No server is running; a resolved variant must not hit the network.
        let (helper, layer) = helper_with_layer();

        let emitted = helper
            .view_item(sample_variant(), ItemPlacement::in_list("Homepage"))
            .await
            .unwrap();

        assert!(emitted);
        let entries = layer.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], json!({"ecommerce": null}));

        let item = &entries[1]["ecommerce"]["items"][0];
        assert_eq!(item["item_id"], "ABC");
        assert_eq!(item["item_name"], "Shirt - Red / M");
        assert_eq!(item["item_list_name"], "Homepage");
        assert_eq!(item["index"], 0);
    }

    #[tokio::test]
    async fn test_select_item_uses_explicit_position() {
        let (helper, layer) = helper_with_layer();

        helper
            .select_item(
                sample_variant(),
                ItemPlacement::in_list("Search results").at_position(4),
            )
            .await
            .unwrap();

        let entries = layer.entries();
        assert_eq!(entries[1]["event"], "select_item");
        assert_eq!(entries[1]["ecommerce"]["items"][0]["index"], 4);
    }

    #[tokio::test]
    async fn test_add_to_cart_carries_quantity() {
        let (helper, layer) = helper_with_layer();

        helper.add_to_cart(sample_variant(), 2).await.unwrap();

        let entries = layer.entries();
        assert_eq!(entries[1]["event"], "add_to_cart");
        let item = &entries[1]["ecommerce"]["items"][0];
        assert_eq!(item["quantity"], 2);
        assert!(item.get("index").is_none());
        assert!(item.get("item_list_name").is_none());
    }

    #[tokio::test]
    async fn test_remove_from_cart_carries_quantity() {
        let (helper, layer) = helper_with_layer();

        helper.remove_from_cart(sample_variant(), 1).await.unwrap();

        assert_eq!(layer.entries()[1]["event"], "remove_from_cart");
    }

    #[test]
    fn test_view_item_list_forwards_items_untransformed() {
        let (helper, layer) = helper_with_layer();

        let item = GaItem {
            currency: "USD".to_string(),
            item_id: Some("SKU-1".to_string()),
            item_name: "Thing".to_string(),
            item_brand: "Acme".to_string(),
            item_category: "Stuff".to_string(),
            item_variant: "Default".to_string(),
            price: "1.00".to_string(),
            index: Some(7),
            item_list_name: Some("Collection".to_string()),
            quantity: None,
        };

        assert!(helper.view_item_list(vec![item]));

        let entries = layer.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["event"], "view_item_list");
        assert_eq!(entries[1]["ecommerce"]["items"][0]["index"], 7);
    }

    #[test]
    fn test_view_item_list_empty_is_noop() {
        let (helper, layer) = helper_with_layer();
        assert!(!helper.view_item_list(vec![]));
        assert!(layer.is_empty());
    }

    #[test]
    fn test_view_cart_passthrough() {
        let (helper, layer) = helper_with_layer();

        let payload = json!({
            "currency": "USD",
            "value": "19.98",
            "items": [{"item_id": "ABC", "quantity": 2}],
        });
        assert!(helper.view_cart(Some(payload.clone())));

        let entries = layer.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], json!({"ecommerce": null}));
        assert_eq!(entries[1]["event"], "view_cart");
        assert_eq!(entries[1]["ecommerce"], payload);
    }

    #[test]
    fn test_view_cart_missing_payload_is_noop() {
        let (helper, layer) = helper_with_layer();

        assert!(!helper.view_cart(None));
        assert!(!helper.view_cart(Some(json!(null))));
        assert!(layer.is_empty());
    }

    #[test]
    fn test_begin_checkout_and_purchase_passthrough() {
        let (helper, layer) = helper_with_layer();

        assert!(helper.begin_checkout(Some(json!({"value": "9.99"}))));
        assert!(helper.purchase(Some(json!({"transaction_id": "T-1"}))));

        let entries = layer.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1]["event"], "begin_checkout");
        assert_eq!(entries[3]["event"], "purchase");
        assert_eq!(entries[3]["ecommerce"]["transaction_id"], "T-1");
    }

    #[test]
    fn test_helper_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GaHelper>();
    }
}
