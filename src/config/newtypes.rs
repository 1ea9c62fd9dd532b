//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated BigCommerce store hash.
///
/// The store hash identifies the store in every API path
/// (`/stores/{store_hash}/v3/...`) and in the `store_hash` claim of customer
/// login tokens.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::StoreHash;
///
/// let hash = StoreHash::new(" abc123 ").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        Ok(Self(hash.to_string()))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for StoreHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API access token, sent as the `X-Auth-Token` header.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::AccessToken;
///
/// let token = AccessToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API client ID, used as the issuer of customer login tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API client secret, used to sign customer login tokens.
///
/// # Security
///
/// The `Debug` implementation masks the secret value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated API host, e.g. `https://api.bigcommerce.com`.
///
/// Only `http` and `https` schemes are accepted. Trailing slashes are removed
/// so the host can be joined directly with an absolute path.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::ApiHost;
///
/// let host = ApiHost::new("http://localhost:3000/").unwrap();
/// assert_eq!(host.as_ref(), "http://localhost:3000");
/// assert_eq!(host.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    host_name: String,
}

impl ApiHost {
    /// The production API host.
    pub const DEFAULT: &'static str = "https://api.bigcommerce.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL cannot be parsed,
    /// does not use `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidApiHost { url: url.clone() };

        let parsed = reqwest::Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        let host_name = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(invalid)?
            .to_string();

        Ok(Self {
            url: trimmed.to_string(),
            host_name,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_name: "api.bigcommerce.com".to_string(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
