//! Checkout redirect resolution with optional customer login.
//!
//! A cart exposes storefront redirect URLs (cart page, checkout page,
//! embedded checkout). When the cart belongs to a signed-in customer, the
//! selected URL is wrapped in a single-use login token so that following it
//! signs the customer in on the way:
//!
//! ```text
//! https://shop.example/checkout?step=2
//!   -> https://shop.example/login/token/{token}   (token.redirect_to = "/checkout?step=2")
//! ```
//!
//! Guest carts (`customer_id` absent or zero) get the URL back unchanged.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::Deserialize;

use crate::auth::{LoginTokenOptions, TokenIssuer};
use crate::checkout::client::CheckoutClient;
use crate::checkout::errors::CheckoutError;
use crate::clients::Transport;

/// Channel assumed when a cart does not report one.
pub const DEFAULT_CHANNEL_ID: u64 = 1;

/// Path prefix of the storefront login-by-token endpoint.
pub const LOGIN_TOKEN_PATH: &str = "/login/token/";

/// The kind of redirect URL to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// The storefront cart page.
    CartUrl,
    /// The storefront checkout page.
    CheckoutUrl,
    /// The embedded checkout page.
    EmbeddedCheckoutUrl,
}

impl UrlKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::CartUrl, Self::CheckoutUrl, Self::EmbeddedCheckoutUrl];

    /// Returns the `redirect_urls` key for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CartUrl => "cart_url",
            Self::CheckoutUrl => "checkout_url",
            Self::EmbeddedCheckoutUrl => "embedded_checkout_url",
        }
    }

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!("'{}'", kind.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlKind {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CheckoutError::InvalidArgument {
                argument: "url kind",
                value: s.to_string(),
                expected: Self::expected(),
            })
    }
}

/// The fields of a cart needed to resolve a redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CartSnapshot {
    /// Redirect URLs keyed by [`UrlKind`] name. Disabled kinds may be absent or `null`.
    #[serde(default)]
    pub redirect_urls: HashMap<String, Option<String>>,
    /// The storefront channel.
    #[serde(default)]
    pub channel_id: Option<u64>,
    /// The customer; `0` or absent for guest carts.
    #[serde(default)]
    pub customer_id: Option<i64>,
}

impl CartSnapshot {
    /// Returns the redirect URL of the given kind, if enabled.
    #[must_use]
    pub fn redirect_url(&self, kind: UrlKind) -> Option<&str> {
        self.redirect_urls
            .get(kind.as_str())
            .and_then(Option::as_deref)
    }

    /// Returns the customer ID for signed-in carts.
    #[must_use]
    pub fn signed_in_customer(&self) -> Option<u64> {
        self.customer_id
            .filter(|id| *id > 0)
            .and_then(|id| u64::try_from(id).ok())
    }
}

#[derive(Deserialize)]
struct CartEnvelope {
    data: CartSnapshot,
}

/// An absolute storefront URL split into origin and path plus query.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StorefrontUrl {
    origin: String,
    target: String,
}

impl StorefrontUrl {
    fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let target = url.query().filter(|query| !query.is_empty()).map_or_else(
            || url.path().to_string(),
            |query| format!("{}?{query}", url.path()),
        );
        Some(Self {
            origin: url.origin().ascii_serialization(),
            target,
        })
    }

    fn with_login_token(&self, token: &str) -> String {
        format!("{}{LOGIN_TOKEN_PATH}{token}", self.origin)
    }
}

impl<T: Transport> CheckoutClient<T> {
    /// Resolves a redirect URL for a checkout, given the kind as a string.
    ///
    /// `kind` must be `cart_url`, `checkout_url` or `embedded_checkout_url`;
    /// anything else fails with [`CheckoutError::InvalidArgument`] before any
    /// request is made.
    ///
    /// # Errors
    ///
    /// See [`resolve_checkout_redirect`](Self::resolve_checkout_redirect).
    pub async fn get_checkout_redirect_with_login<I: TokenIssuer>(
        &self,
        issuer: &I,
        checkout_id: &str,
        kind: &str,
        options: LoginTokenOptions,
    ) -> Result<String, CheckoutError> {
        let kind = kind.parse::<UrlKind>()?;
        self.resolve_checkout_redirect(issuer, checkout_id, kind, options)
            .await
    }

    /// Resolves a redirect URL for a checkout, logging the customer in if
    /// the cart belongs to one.
    ///
    /// 1. Fetches the cart with its redirect URLs.
    /// 2. Picks the URL of the requested kind.
    /// 3. For signed-in carts, asks `issuer` for a login token whose
    ///    `redirect_to` is the URL's path and query, and returns
    ///    `{origin}/login/token/{token}`.
    /// 4. For guest carts, returns the URL unchanged.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Http`] if fetching the cart fails
    /// - [`CheckoutError::MalformedResponse`] if the response has no cart data
    /// - [`CheckoutError::MissingRedirectUrl`] if the kind is not enabled
    /// - [`CheckoutError::InvalidRedirectUrl`] if the URL is not absolute http(s)
    /// - [`CheckoutError::LoginToken`] if the issuer fails
    pub async fn resolve_checkout_redirect<I: TokenIssuer>(
        &self,
        issuer: &I,
        checkout_id: &str,
        kind: UrlKind,
        options: LoginTokenOptions,
    ) -> Result<String, CheckoutError> {
        tracing::debug!("Resolving {} redirect for checkout {}", kind, checkout_id);

        let body = self.get_cart_with_redirect_urls(checkout_id, None).await?;
        let snapshot = serde_json::from_value::<CartEnvelope>(body)
            .map_err(|source| CheckoutError::MalformedResponse {
                checkout_id: checkout_id.to_string(),
                source,
            })?
            .data;

        let raw_url =
            snapshot
                .redirect_url(kind)
                .ok_or_else(|| CheckoutError::MissingRedirectUrl {
                    kind: kind.to_string(),
                    checkout_id: checkout_id.to_string(),
                })?;

        let url = StorefrontUrl::parse(raw_url).ok_or_else(|| CheckoutError::InvalidRedirectUrl {
            url: raw_url.to_string(),
            checkout_id: checkout_id.to_string(),
        })?;

        let Some(customer_id) = snapshot.signed_in_customer() else {
            tracing::debug!("Checkout {} belongs to a guest, no login token", checkout_id);
            return Ok(raw_url.to_string());
        };

        let channel_id = snapshot.channel_id.unwrap_or(DEFAULT_CHANNEL_ID);
        let options = LoginTokenOptions {
            redirect_to: Some(url.target.clone()),
            ..options
        };

        let token = issuer
            .issue_login_token(customer_id, channel_id, &options)
            .await
            .map_err(|e| CheckoutError::LoginToken {
                customer_id,
                source: Box::new(e),
            })?;

        Ok(url.with_login_token(token.as_ref()))
    }
}
