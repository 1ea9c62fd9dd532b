//! HTTP transport for BigCommerce API communication.
//!
//! # Overview
//!
//! - [`Transport`]: The four-verb capability (`get`, `post`, `put`, `delete`)
//!   the checkout binding is written against
//! - [`HttpClient`]: The reqwest-backed [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: Transport-level failures carrying the upstream status and message
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_checkout::clients::{HttpClient, Transport};
//!
//! let client = HttpClient::new(&config)?;
//! let checkout = client.get("/v3/checkouts/some-checkout-id", None).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimitInfo};
pub use transport::{Query, Transport};
