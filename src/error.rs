//! Error types for the BigCommerce checkout binding.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_checkout::{StoreHash, ConfigError};
//!
//! let result = StoreHash::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreHash)));
//! ```

use thiserror::Error;

/// Errors that can occur during configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the hash of your BigCommerce store.")]
    EmptyStoreHash,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce API access token.")]
    EmptyAccessToken,

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid BigCommerce API client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid BigCommerce API client secret.")]
    EmptyClientSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a valid URL with an http or https scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
