//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimitInfo`]
//! parsed from BigCommerce's `X-Rate-Limit-*` headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// BigCommerce reports the remaining quota of the current window along with
/// the window length and the time until it resets.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bigcommerce_checkout::clients::RateLimitInfo;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-requests-left".to_string(), vec!["3".to_string()]);
/// headers.insert("x-rate-limit-requests-quota".to_string(), vec!["150".to_string()]);
///
/// let info = RateLimitInfo::from_headers(&headers).unwrap();
/// assert_eq!(info.requests_left, 3);
/// assert_eq!(info.requests_quota, Some(150));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests left in the current window (`X-Rate-Limit-Requests-Left`).
    pub requests_left: u32,
    /// Total requests allowed per window (`X-Rate-Limit-Requests-Quota`).
    pub requests_quota: Option<u32>,
    /// Milliseconds until the window resets (`X-Rate-Limit-Time-Reset-Ms`).
    pub time_reset_ms: Option<u64>,
    /// Window length in milliseconds (`X-Rate-Limit-Time-Window-Ms`).
    pub time_window_ms: Option<u64>,
}

impl RateLimitInfo {
    /// Parses rate limit headers from a lower-cased header map.
    ///
    /// Returns `None` when `X-Rate-Limit-Requests-Left` is absent or not a number.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn first<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        }

        Some(Self {
            requests_left: first(headers, "x-rate-limit-requests-left")?,
            requests_quota: first(headers, "x-rate-limit-requests-quota"),
            time_reset_ms: first(headers, "x-rate-limit-time-reset-ms"),
            time_window_ms: first(headers, "x-rate-limit-time-window-ms"),
        })
    }

    /// Returns `true` when no requests are left in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.requests_left == 0
    }
}

/// A parsed HTTP response from the BigCommerce API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, if the headers were present.
    pub rate_limit: Option<RateLimitInfo>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimitInfo::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
