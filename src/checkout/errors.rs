//! Error types for cart and checkout operations.
//!
//! - [`CheckoutError::InvalidArgument`]: A bad URL kind, rejected before any request
//! - [`CheckoutError::MissingRedirectUrl`]: The requested redirect URL is not enabled
//! - [`CheckoutError::Http`]: Transport failures, passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_checkout::CheckoutError;
//!
//! match client.get_checkout_redirect_with_login(&issuer, "chk-1", "checkout_url", options).await {
//!     Ok(url) => println!("Send the shopper to {url}"),
//!     Err(CheckoutError::MissingRedirectUrl { kind, .. }) => println!("{kind} is not enabled"),
//!     Err(CheckoutError::Http(e)) => println!("API error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for cart and checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A caller-supplied value is not one of the accepted values.
    #[error("Invalid {argument} '{value}'. Must be one of: {expected}")]
    InvalidArgument {
        /// The argument that was rejected.
        argument: &'static str,
        /// The offending value.
        value: String,
        /// The accepted values.
        expected: String,
    },

    /// The cart has no redirect URL of the requested kind.
    #[error("Redirect URL '{kind}' is not available for checkout '{checkout_id}'")]
    MissingRedirectUrl {
        /// The requested URL kind.
        kind: String,
        /// The checkout that was fetched.
        checkout_id: String,
    },

    /// The redirect URL returned by the API is not an absolute http(s) URL.
    #[error("Redirect URL '{url}' for checkout '{checkout_id}' is not a valid absolute URL")]
    InvalidRedirectUrl {
        /// The URL that failed to parse.
        url: String,
        /// The checkout that was fetched.
        checkout_id: String,
    },

    /// The API response did not have the expected shape.
    #[error("Unexpected response for checkout '{checkout_id}': {source}")]
    MalformedResponse {
        /// The checkout that was fetched.
        checkout_id: String,
        /// The deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The token issuer failed to mint a login token.
    #[error("Failed to issue login token for customer {customer_id}: {source}")]
    LoginToken {
        /// The customer the token was requested for.
        customer_id: u64,
        /// The issuer's error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_argument_lists_expected_values() {
        let error = CheckoutError::InvalidArgument {
            argument: "url kind",
            value: "login_url".to_string(),
            expected: "'cart_url', 'checkout_url'".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("login_url"));
        assert!(message.contains("'cart_url', 'checkout_url'"));
    }

    #[test]
    fn test_missing_redirect_url_names_kind_and_checkout() {
        let error = CheckoutError::MissingRedirectUrl {
            kind: "embedded_checkout_url".to_string(),
            checkout_id: "chk-1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("embedded_checkout_url"));
        assert!(message.contains("chk-1"));
    }

    #[test]
    fn test_http_errors_pass_through_unchanged() {
        let error: CheckoutError = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"title":"Not Found"}"#.to_string(),
            error_reference: None,
        })
        .into();

        assert_eq!(error.to_string(), r#"HTTP 404: {"title":"Not Found"}"#);
        assert!(matches!(
            error,
            CheckoutError::Http(HttpError::Response(HttpResponseError { code: 404, .. }))
        ));
    }
}
