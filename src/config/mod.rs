//! Configuration types for the BigCommerce checkout binding.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigCommerceConfig`]: The configuration struct holding store and credential settings
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`StoreHash`]: A validated store hash
//! - [`AccessToken`]: A validated API access token with masked debug output
//! - [`ClientId`] / [`ClientSecret`]: API client credentials used for customer login tokens
//! - [`ApiHost`]: A validated API host URL
//!
//! The cart and checkout base paths ([`BASE_CART_PATH`], [`BASE_CHECKOUT_PATH`])
//! are fixed for the life of the process.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_checkout::{AccessToken, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiHost, ClientId, ClientSecret, StoreHash};

use crate::error::ConfigError;

/// Base path of the v3 cart resources.
pub const BASE_CART_PATH: &str = "/v3/carts";

/// Base path of the v3 checkout resources.
pub const BASE_CHECKOUT_PATH: &str = "/v3/checkouts";

/// Configuration for the BigCommerce checkout binding.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::{AccessToken, BigCommerceConfig, ClientId, ClientSecret, StoreHash};
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("client-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.client_secret().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    store_hash: StoreHash,
    access_token: AccessToken,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API client ID, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the API client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `store_hash` and `access_token`.
///
/// # Defaults
///
/// - `api_host`: `https://api.bigcommerce.com`
/// - `client_id` / `client_secret`: `None` (required only for customer login tokens)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API client ID.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the API client secret.
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the API host, e.g. to point at a proxy or a mock server.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_hash = self
            .store_hash
            .ok_or(ConfigError::MissingRequiredField {
                field: "store_hash",
            })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(BigCommerceConfig {
            store_hash,
            access_token,
            client_id: self.client_id,
            client_secret: self.client_secret,
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
