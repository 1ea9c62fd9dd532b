//! Cart and checkout API binding.
//!
//! # Overview
//!
//! - [`CheckoutClient`]: One method per cart/checkout endpoint, plus redirect
//!   resolution via [`CheckoutClient::resolve_checkout_redirect`]
//! - [`RequestParams`] / [`IncludeSet`]: Query parameters and `include` tokens
//! - [`build_include_params`]: Merges a helper's base includes into caller params
//! - [`UrlKind`] / [`CartSnapshot`]: Redirect URL selection
//! - [`CheckoutError`]: Error type for all operations
//!
//! # Endpoints
//!
//! | Operation | Verb | Path |
//! |---|---|---|
//! | get cart | GET | `/v3/carts/{cartId}` |
//! | generate cart redirect URLs | POST | `/v3/carts/{cartId}/redirect_urls` |
//! | update cart customer | PUT | `/v3/carts/{cartId}` |
//! | create cart | POST | `/v3/carts/{cartId}` |
//! | add line items | POST | `/v3/carts/{cartId}/items` |
//! | update line item | PUT | `/v3/carts/{cartId}/items/{itemId}` |
//! | remove line item | DELETE | `/v3/carts/{cartId}/items/{itemId}` |
//! | get checkout | GET | `/v3/checkouts/{checkoutId}` |
//! | add billing address | POST | `/v3/checkouts/{checkoutId}/billing-address` |
//! | update billing address | PUT | `/v3/checkouts/{checkoutId}/billing-address/{addressId}` |
//! | add consignment | POST | `/v3/checkouts/{checkoutId}/consignments` |
//! | update consignment | PUT | `/v3/checkouts/{checkoutId}/consignments/{consignmentId}` |
//! | delete consignment | DELETE | `/v3/checkouts/{checkoutId}/consignments/{consignmentId}` |
//! | add coupon | POST | `/v3/checkouts/{checkoutId}/coupons` |
//! | delete coupon | DELETE | `/v3/checkouts/{checkoutId}/coupons/{couponCode}` |
//! | convert to order | POST | `/v3/checkouts/{checkoutId}/orders` |

mod client;
mod errors;
mod params;
mod paths;
mod redirect;

pub use client::CheckoutClient;
pub use errors::CheckoutError;
pub use params::{
    build_include_params, IncludeSet, RequestParams, AVAILABLE_SHIPPING_OPTIONS,
    DIGITAL_ITEM_OPTIONS, INCLUDE_PARAM, PHYSICAL_ITEM_OPTIONS, REDIRECT_URLS,
};
pub use redirect::{CartSnapshot, UrlKind, DEFAULT_CHANNEL_ID, LOGIN_TOKEN_PATH};
