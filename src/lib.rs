//! # BigCommerce Checkout
//!
//! A Rust binding for the BigCommerce v3 Cart and Checkout REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - A four-verb [`Transport`](clients::Transport) abstraction with a reqwest-backed
//!   [`HttpClient`]
//! - [`CheckoutClient`], one method per cart and checkout endpoint, with `include`
//!   parameters merged as sets across helper layers
//! - Checkout redirect resolution that wraps storefront URLs in a customer
//!   login token for signed-in carts
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_checkout::{AccessToken, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Cart and Checkout Requests
//!
//! ```rust,ignore
//! use bigcommerce_checkout::{CheckoutClient, RequestParams};
//!
//! let client = CheckoutClient::from_config(&config)?;
//!
//! client.add_checkout_coupon("checkout-id", "SAVE10", None).await?;
//! let checkout = client
//!     .get_checkout_with_shipping_options("checkout-id", None)
//!     .await?;
//! ```
//!
//! ## Redirect With Customer Login
//!
//! ```rust,ignore
//! use bigcommerce_checkout::{CheckoutClient, CustomerLoginJwtIssuer, LoginTokenOptions};
//!
//! let client = CheckoutClient::from_config(&config)?;
//! let issuer = CustomerLoginJwtIssuer::new(&config)?;
//!
//! let url = client
//!     .get_checkout_redirect_with_login(&issuer, "checkout-id", "checkout_url", LoginTokenOptions::new())
//!     .await?;
//! // Send the shopper to `url`
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Pass-through**: Request bodies are forwarded as-is; the API validates them

pub mod auth;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{CustomerLoginJwtIssuer, LoginToken, LoginTokenError, LoginTokenOptions, TokenIssuer};
pub use checkout::{
    build_include_params, CartSnapshot, CheckoutClient, CheckoutError, IncludeSet, RequestParams,
    UrlKind,
};
pub use clients::{HttpClient, HttpError, HttpResponseError, Transport};
pub use config::{
    AccessToken, ApiHost, BigCommerceConfig, BigCommerceConfigBuilder, ClientId, ClientSecret,
    StoreHash, BASE_CART_PATH, BASE_CHECKOUT_PATH,
};
pub use error::ConfigError;
