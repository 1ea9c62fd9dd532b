//! Customer login tokens.
//!
//! A customer login token is a short-lived HS256 JWT that, when visited at
//! `{storefront}/login/token/{token}`, signs the customer in and redirects
//! them to the `redirect_to` path embedded in the token.
//!
//! # Claims
//!
//! - `iss`: API client ID
//! - `iat`: Issued at timestamp
//! - `jti`: Random, unique token ID (tokens are single use)
//! - `operation`: Always `customer_login`
//! - `store_hash`: The store the customer belongs to
//! - `customer_id`: The customer to sign in
//! - `channel_id`: The storefront channel
//! - `redirect_to`: Relative path (plus query) to land on after login
//! - `request_ip`: Optional IP address the token is restricted to

use std::fmt;
use std::future::Future;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{BigCommerceConfig, ClientId, ClientSecret, StoreHash};
use crate::error::ConfigError;

/// The `operation` claim value for customer login tokens.
pub const CUSTOMER_LOGIN_OPERATION: &str = "customer_login";

const JTI_LENGTH: usize = 32;

/// An opaque, signed login token.
///
/// The token is never persisted by this crate. `Debug` output is masked.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginToken(String);

impl LoginToken {
    /// Wraps an already-issued token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Consumes the token, returning the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for LoginToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoginToken(*****)")
    }
}

/// Options passed to a [`TokenIssuer`].
///
/// The redirect resolver always overwrites `redirect_to` with the path and
/// query of the resolved storefront URL.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::LoginTokenOptions;
/// use serde_json::json;
///
/// let options = LoginTokenOptions::new()
///     .request_ip("203.0.113.7")
///     .claim("exp", json!(1_900_000_000));
/// assert_eq!(options.request_ip.as_deref(), Some("203.0.113.7"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginTokenOptions {
    /// Relative path (plus query) to redirect to after login.
    pub redirect_to: Option<String>,
    /// IP address the token is restricted to.
    pub request_ip: Option<String>,
    /// Additional claims to embed in the token.
    pub extra_claims: Map<String, Value>,
}

impl LoginTokenOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the post-login redirect target.
    #[must_use]
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    /// Restricts the token to a request IP.
    #[must_use]
    pub fn request_ip(mut self, ip: impl Into<String>) -> Self {
        self.request_ip = Some(ip.into());
        self
    }

    /// Adds an extra claim.
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra_claims.insert(name.into(), value);
        self
    }
}

/// Mints login tokens for signed-in customers.
///
/// Implementations may sign locally (see [`CustomerLoginJwtIssuer`]) or call
/// out to a remote service.
pub trait TokenIssuer: Send + Sync {
    /// The error produced when a token cannot be issued.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issues a login token for `customer_id` on `channel_id`.
    fn issue_login_token(
        &self,
        customer_id: u64,
        channel_id: u64,
        options: &LoginTokenOptions,
    ) -> impl Future<Output = Result<LoginToken, Self::Error>> + Send;
}

/// Errors from [`CustomerLoginJwtIssuer`].
#[derive(Debug, Error)]
pub enum LoginTokenError {
    /// The JWT could not be signed.
    #[error("Failed to sign customer login token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues customer login JWTs signed with the API client secret.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::{
///     AccessToken, BigCommerceConfig, ClientId, ClientSecret, CustomerLoginJwtIssuer, StoreHash,
/// };
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("client-secret").unwrap())
///     .build()
///     .unwrap();
///
/// let issuer = CustomerLoginJwtIssuer::new(&config).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct CustomerLoginJwtIssuer {
    client_id: ClientId,
    client_secret: ClientSecret,
    store_hash: StoreHash,
}

impl CustomerLoginJwtIssuer {
    /// Creates an issuer from the configured client credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not configured.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, ConfigError> {
        let client_id = config
            .client_id()
            .cloned()
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret =
            config
                .client_secret()
                .cloned()
                .ok_or(ConfigError::MissingRequiredField {
                    field: "client_secret",
                })?;

        Ok(Self {
            client_id,
            client_secret,
            store_hash: config.store_hash().clone(),
        })
    }

    /// Builds the claim set. Fixed claims override extra claims of the same name.
    fn claims(
        &self,
        customer_id: u64,
        channel_id: u64,
        options: &LoginTokenOptions,
    ) -> Map<String, Value> {
        let mut claims = options.extra_claims.clone();

        let jti: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(JTI_LENGTH)
            .map(char::from)
            .collect();

        claims.insert("iss".into(), Value::from(self.client_id.as_ref()));
        claims.insert("iat".into(), Value::from(Utc::now().timestamp()));
        claims.insert("jti".into(), Value::from(jti));
        claims.insert("operation".into(), Value::from(CUSTOMER_LOGIN_OPERATION));
        claims.insert("store_hash".into(), Value::from(self.store_hash.as_ref()));
        claims.insert("customer_id".into(), Value::from(customer_id));
        claims.insert("channel_id".into(), Value::from(channel_id));
        if let Some(redirect_to) = &options.redirect_to {
            claims.insert("redirect_to".into(), Value::from(redirect_to.as_str()));
        }
        if let Some(request_ip) = &options.request_ip {
            claims.insert("request_ip".into(), Value::from(request_ip.as_str()));
        }

        claims
    }

    /// Signs a customer login JWT.
    ///
    /// # Errors
    ///
    /// Returns [`LoginTokenError::Signing`] if encoding fails.
    pub fn sign(
        &self,
        customer_id: u64,
        channel_id: u64,
        options: &LoginTokenOptions,
    ) -> Result<LoginToken, LoginTokenError> {
        let claims = self.claims(customer_id, channel_id, options);
        let key = EncodingKey::from_secret(self.client_secret.as_ref().as_bytes());
        let token = encode(&Header::new(Algorithm::HS256), &claims, &key)?;
        Ok(LoginToken(token))
    }
}

impl TokenIssuer for CustomerLoginJwtIssuer {
    type Error = LoginTokenError;

    async fn issue_login_token(
        &self,
        customer_id: u64,
        channel_id: u64,
        options: &LoginTokenOptions,
    ) -> Result<LoginToken, Self::Error> {
        tracing::debug!(
            "Issuing customer login token for customer {} on channel {}",
            customer_id,
            channel_id
        );
        self.sign(customer_id, channel_id, options)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CustomerLoginJwtIssuer>();
    assert_send_sync::<LoginToken>();
};
