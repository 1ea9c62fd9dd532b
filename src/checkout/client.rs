//! Cart and checkout endpoints.
//!
//! Each method picks a resource path, an optional base include set and an
//! HTTP verb, then forwards to the [`Transport`]. Request bodies are passed
//! through untouched; validation is left to the API.

use serde_json::{json, Value};

use crate::checkout::errors::CheckoutError;
use crate::checkout::params::{build_include_params, IncludeSet, RequestParams};
use crate::checkout::paths;
use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::BigCommerceConfig;

/// Client for the v3 cart and checkout endpoints.
///
/// Holds no state beyond its transport, so concurrent calls never share data.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_checkout::{CheckoutClient, RequestParams};
///
/// let client = CheckoutClient::from_config(&config)?;
///
/// let cart = client.get_cart_with_option_selections("cart-id", None).await?;
/// let checkout = client
///     .get_checkout("cart-id", Some(&RequestParams::new().include("consignments.available_shipping_options")))
///     .await?;
/// ```
#[derive(Debug)]
pub struct CheckoutClient<T> {
    transport: T,
}

impl CheckoutClient<HttpClient> {
    /// Creates a client backed by the reqwest [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn from_config(config: &BigCommerceConfig) -> Result<Self, HttpError> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<T: Transport> CheckoutClient<T> {
    /// Creates a client over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    // ------------------------------------------------------------------
    // Carts
    // ------------------------------------------------------------------

    /// Gets a cart by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_cart(
        &self,
        cart_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self.transport.get(&paths::cart(cart_id), query).await?)
    }

    /// Gets a cart together with line item option selections.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_cart_with_option_selections(
        &self,
        cart_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let params = build_include_params(&IncludeSet::option_selections(), params);
        self.get_cart(cart_id, Some(&params)).await
    }

    /// Gets a cart together with its redirect URLs.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_cart_with_redirect_urls(
        &self,
        cart_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let params = build_include_params(&IncludeSet::redirect_urls(), params);
        self.get_cart(cart_id, Some(&params)).await
    }

    /// Generates redirect URLs for a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn generate_cart_redirect_urls(&self, cart_id: &str) -> Result<Value, CheckoutError> {
        Ok(self
            .transport
            .post(&paths::cart_redirect_urls(cart_id), json!({}), None)
            .await?)
    }

    /// Sets the customer on a cart, which recalculates pricing and discounts
    /// for that customer.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn update_cart_customer_id(
        &self,
        cart_id: &str,
        customer_id: u64,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let body = json!({ "customer_id": customer_id });
        let query = params.and_then(RequestParams::to_query);
        Ok(self.transport.put(&paths::cart(cart_id), body, query).await?)
    }

    /// Creates a cart from a cart object.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn create_cart(
        &self,
        cart_id: &str,
        cart: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self.transport.post(&paths::cart(cart_id), cart, query).await?)
    }

    /// Creates a cart and returns its redirect URLs in the response.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn create_cart_with_redirect_urls(
        &self,
        cart_id: &str,
        cart: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let params = build_include_params(&IncludeSet::redirect_urls(), params);
        self.create_cart(cart_id, cart, Some(&params)).await
    }

    /// Adds line items to an existing cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn add_line_items_to_cart(
        &self,
        cart_id: &str,
        line_items: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .post(&paths::cart_items(cart_id), line_items, query)
            .await?)
    }

    /// Updates a line item on an existing cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn update_cart_line_item(
        &self,
        cart_id: &str,
        item_id: &str,
        line_item: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .put(&paths::cart_item(cart_id, item_id), line_item, query)
            .await?)
    }

    /// Removes a line item from a cart. Removing the last item deletes the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn remove_line_item_from_cart(
        &self,
        cart_id: &str,
        item_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .delete(&paths::cart_item(cart_id, item_id), query)
            .await?)
    }

    // ------------------------------------------------------------------
    // Checkouts
    // ------------------------------------------------------------------

    /// Gets a checkout by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_checkout(
        &self,
        checkout_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .get(&paths::checkout(checkout_id), query)
            .await?)
    }

    /// Gets a checkout together with line item option selections.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_checkout_with_option_selections(
        &self,
        checkout_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let params = build_include_params(&IncludeSet::option_selections(), params);
        self.get_checkout(checkout_id, Some(&params)).await
    }

    /// Gets a checkout together with available shipping options.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn get_checkout_with_shipping_options(
        &self,
        checkout_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let params = build_include_params(&IncludeSet::shipping_options(), params);
        self.get_checkout(checkout_id, Some(&params)).await
    }

    /// Adds a billing address to a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn add_checkout_billing_address(
        &self,
        checkout_id: &str,
        address: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .post(&paths::billing_address(checkout_id), address, query)
            .await?)
    }

    /// Updates the billing address on a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn update_checkout_billing_address(
        &self,
        checkout_id: &str,
        address_id: &str,
        address: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .put(
                &paths::billing_address_item(checkout_id, address_id),
                address,
                query,
            )
            .await?)
    }

    /// Adds consignments to a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn add_consignments_to_checkout(
        &self,
        checkout_id: &str,
        consignments: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .post(&paths::consignments(checkout_id), consignments, query)
            .await?)
    }

    /// Updates a consignment on a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn update_checkout_consignment(
        &self,
        checkout_id: &str,
        consignment_id: &str,
        consignment: Value,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .put(
                &paths::consignment(checkout_id, consignment_id),
                consignment,
                query,
            )
            .await?)
    }

    /// Deletes a consignment from a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn delete_checkout_consignment(
        &self,
        checkout_id: &str,
        consignment_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .delete(&paths::consignment(checkout_id, consignment_id), query)
            .await?)
    }

    /// Applies a coupon code to a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn add_checkout_coupon(
        &self,
        checkout_id: &str,
        coupon_code: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let body = json!({ "coupon_code": coupon_code });
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .post(&paths::coupons(checkout_id), body, query)
            .await?)
    }

    /// Removes a coupon code from a checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn delete_checkout_coupon(
        &self,
        checkout_id: &str,
        coupon_code: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .delete(&paths::coupon(checkout_id, coupon_code), query)
            .await?)
    }

    /// Converts a checkout into an order, ready for payment.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the request fails.
    pub async fn convert_checkout_to_order(
        &self,
        checkout_id: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, CheckoutError> {
        let query = params.and_then(RequestParams::to_query);
        Ok(self
            .transport
            .post(&paths::orders(checkout_id), json!({}), query)
            .await?)
    }
}

// Verify CheckoutClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CheckoutClient<HttpClient>>();
};
