//! The four-verb transport capability the checkout binding is built on.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::HttpError;

/// Query parameters sent with a request.
pub type Query = HashMap<String, String>;

/// An HTTP transport exposing the four REST verbs.
///
/// Each verb takes an absolute resource path (e.g. `/v3/carts/{id}`) and
/// returns the parsed JSON response body. Request signing, authentication,
/// retries and timeouts are the implementation's concern; the checkout
/// binding forwards whatever [`HttpError`] the transport produces.
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation. Tests and alternative stacks can supply their own.
pub trait Transport: Send + Sync {
    /// Sends a GET request.
    fn get(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;

    /// Sends a POST request with a JSON body.
    fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;

    /// Sends a PUT request with a JSON body.
    fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;

    /// Sends a DELETE request.
    fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;
}
