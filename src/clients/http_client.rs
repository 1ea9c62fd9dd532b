//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used by [`CheckoutClient`](crate::CheckoutClient).

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{Query, Transport};
use crate::config::BigCommerceConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Base URI construction from the API host and store hash
/// - Default headers including User-Agent and `X-Auth-Token`
/// - JSON request and response bodies
/// - Error summaries for non-2xx responses
///
/// Every call is a single attempt; there is no retry loop.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_checkout::{AccessToken, BigCommerceConfig, StoreHash};
/// use bigcommerce_checkout::clients::{HttpClient, Transport};
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let cart = client.get("/v3/carts/some-cart-id", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.bigcommerce.com/stores/abc123`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &BigCommerceConfig) -> Result<Self, HttpError> {
        let base_uri = format!(
            "{}/stores/{}",
            config.api_host().as_ref(),
            config.store_hash().as_ref()
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent =
            format!("{user_agent_prefix}BigCommerce Checkout Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Auth-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the BigCommerce API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);
        tracing::debug!("Sending {} request to {}", request.http_method, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                tracing::warn!(
                    "Non-JSON response body from {} (HTTP {})",
                    request.path,
                    code
                );
                serde_json::json!({ "raw_body": body_text })
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(rate_limit) = response.rate_limit.filter(|r| r.is_exhausted()) {
            tracing::warn!(
                "BigCommerce rate limit exhausted after request to {}, window resets in {:?} ms",
                request.path,
                rate_limit.time_reset_ms
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Query>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build()?;
        self.request(request).await.map(|response| response.body)
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Summarizes a BigCommerce error body as JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["title", "detail", "errors"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str, query: Option<Query>) -> Result<serde_json::Value, HttpError> {
        self.send(HttpMethod::Get, path, None, query).await
    }

    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(HttpMethod::Post, path, Some(body), query).await
    }

    async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Query>,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(HttpMethod::Put, path, Some(body), query).await
    }

    async fn delete(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(HttpMethod::Delete, path, None, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiHost, StoreHash};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(api_host: Option<&str>) -> BigCommerceConfig {
        let mut builder = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap());
        if let Some(host) = api_host {
            builder = builder.api_host(ApiHost::new(host).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_construction_uses_store_hash() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(
            client.base_uri(),
            "https://api.bigcommerce.com/stores/abc123"
        );
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("X-Auth-Token"),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers
            .get("User-Agent")
            .unwrap()
            .contains("BigCommerce Checkout Library v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[tokio::test]
    async fn test_get_returns_parsed_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/carts/cart-1"))
            .and(header("X-Auth-Token", "test-access-token"))
            .and(query_param("include", "redirect_urls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "cart-1"}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let mut query = Query::new();
        query.insert("include".to_string(), "redirect_urls".to_string());

        let body = client.get("/v3/carts/cart-1", Some(query)).await.unwrap();
        assert_eq!(body["data"]["id"], "cart-1");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/stores/abc123/v3/checkouts/chk-1/coupons"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"coupon_code": "SAVE10"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let result = client
            .post(
                "/v3/checkouts/chk-1/coupons",
                json!({"coupon_code": "SAVE10"}),
                None,
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_with_empty_response_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/stores/abc123/v3/carts/cart-1/items/item-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let body = client
            .delete("/v3/carts/cart-1/items/item-1", None)
            .await
            .unwrap();
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_error_response_is_summarized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/carts/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("X-Request-Id", "req-42")
                    .set_body_json(json!({
                        "status": 404,
                        "title": "Cart not found",
                        "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes"
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let error = client.get("/v3/carts/missing", None).await.unwrap_err();

        match error {
            HttpError::Response(e) => {
                assert_eq!(e.code, 404);
                assert!(e.message.contains("Cart not found"));
                assert!(e.message.contains("req-42"));
                assert_eq!(e.error_reference.as_deref(), Some("req-42"));
            }
            other => panic!("Expected Response error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_keeps_raw_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/checkouts/chk-1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let error = client.get("/v3/checkouts/chk-1", None).await.unwrap_err();

        assert_eq!(error.status(), Some(502));
        assert!(error.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_kept_raw() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/checkouts/chk-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let body = client.get("/v3/checkouts/chk-1", None).await.unwrap();

        assert_eq!(body, json!({ "raw_body": "<html>maintenance</html>" }));
    }

    #[tokio::test]
    async fn test_non_json_client_error_keeps_raw_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/carts/cart-1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&mock_server.uri()))).unwrap();
        let error = client.get("/v3/carts/cart-1", None).await.unwrap_err();

        assert_eq!(error.to_string(), r#"HTTP 403: {"raw_body":"Forbidden"}"#);
    }

    #[tokio::test]
    async fn test_relative_path_is_rejected_before_sending() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let error = client.get("v3/carts/abc", None).await.unwrap_err();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }
}
