//! Static GraphQL query documents for the Storefront API.
//!
//! These are fixed, parameterized documents: each lookup takes a single `$id`
//! variable and shares the product variant fragment that defines the shape
//! consumed by the flattener. Effectively configuration, not runtime logic.

/// Fragment defining the variant fields the flattener consumes.
pub const PRODUCT_VARIANT_FRAGMENT: &str = "fragment variant on ProductVariant {
	id
	sku
	title
	price
	compareAtPrice
	image { originalSrc }
	product {
		id
		title
		handle
		productType
		vendor
	}
}";

/// Returns the query document for fetching a product variant by global ID.
#[must_use]
pub fn fetch_variant_query() -> String {
    format!(
        "query($id: ID!) {{
	node(id: $id) {{
		...variant
	}}
}}
{PRODUCT_VARIANT_FRAGMENT}"
    )
}

/// Returns the query document for fetching a cart by global ID.
///
/// The cart node is aliased to `node` and its checkout URL to `webUrl` so
/// cart and checkout lookups share a response shape.
#[must_use]
pub fn fetch_cart_query() -> String {
    format!(
        "query($id: ID!) {{
	node: cart(id: $id) {{
		... on Cart {{
			id
			webUrl: checkoutUrl
			estimatedCost {{
				subtotalAmount {{ amount }}
				totalAmount {{ amount }}
			}}
			lineItems: lines (first: 250) {{
				edges {{
					node {{
						... on CartLine {{
							id
							quantity
							variant: merchandise {{ ...variant }}
						}}
					}}
				}}
			}}
		}}
	}}
}}
{PRODUCT_VARIANT_FRAGMENT}"
    )
}

/// Returns the query document for fetching a checkout by global ID.
#[must_use]
pub fn fetch_checkout_query() -> String {
    format!(
        "query($id: ID!) {{
	node(id: $id) {{
		... on Checkout {{
			id
			webUrl
			subtotalPrice
			totalPrice
			lineItems (first: 250) {{
				edges {{
					node {{
						... on CheckoutLineItem {{
							id
							quantity
							variant {{ ...variant }}
						}}
					}}
				}}
			}}
		}}
	}}
}}
{PRODUCT_VARIANT_FRAGMENT}"
    )
}
