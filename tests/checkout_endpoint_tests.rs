//! Integration tests for the cart and checkout endpoints over HTTP.
//!
//! Each test mounts a wiremock server standing in for the BigCommerce API
//! and verifies the verb, path, body and `include` query a method sends.

use bigcommerce_checkout::{
    AccessToken, ApiHost, BigCommerceConfig, CheckoutClient, CheckoutError, HttpClient, HttpError,
    RequestParams, StoreHash,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OPTION_SELECTIONS: &str = "line_items.digital_items.options,line_items.physical_items.options";

fn create_client(server: &MockServer) -> CheckoutClient<HttpClient> {
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .access_token(AccessToken::new("test-access-token").unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap();
    CheckoutClient::from_config(&config).unwrap()
}

fn ok_body() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": "cart-1" } }))
}

async fn received_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    requests
        .last()
        .and_then(|request| request.url.query().map(String::from))
}

// ============================================================================
// Carts
// ============================================================================

#[tokio::test]
async fn test_get_cart_sends_no_query_without_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(header("X-Auth-Token", "test-access-token"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    let body = assert_ok!(create_client(&server).get_cart("cart-1", None).await);

    assert_eq!(body["data"]["id"], "cart-1");
    assert_eq!(received_query(&server).await, None);
}

#[tokio::test]
async fn test_get_cart_forwards_caller_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(query_param("include", "promotions.banners"))
        .and(query_param("currency", "EUR"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new()
        .include("promotions.banners")
        .param("currency", "EUR");
    assert_ok!(create_client(&server).get_cart("cart-1", Some(&params)).await);
}

#[tokio::test]
async fn test_get_cart_with_option_selections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(query_param("include", OPTION_SELECTIONS))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .get_cart_with_option_selections("cart-1", None)
            .await
    );
}

#[tokio::test]
async fn test_get_cart_with_redirect_urls_merges_caller_includes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(query_param("include", "promotions.banners,redirect_urls"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    // the base token is not duplicated when the caller also asks for it
    let params = RequestParams::new()
        .include("redirect_urls")
        .include("promotions.banners");
    assert_ok!(
        create_client(&server)
            .get_cart_with_redirect_urls("cart-1", Some(&params))
            .await
    );
}

#[tokio::test]
async fn test_generate_cart_redirect_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/carts/cart-1/redirect_urls"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "checkout_url": "https://shop.example/checkout" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = assert_ok!(
        create_client(&server)
            .generate_cart_redirect_urls("cart-1")
            .await
    );
    assert_eq!(body["data"]["checkout_url"], "https://shop.example/checkout");
}

#[tokio::test]
async fn test_update_cart_customer_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "customer_id": 42 })))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .update_cart_customer_id("cart-1", 42, None)
            .await
    );
}

#[tokio::test]
async fn test_create_cart_passes_body_through() {
    let server = MockServer::start().await;
    let cart = json!({
        "line_items": [{ "quantity": 2, "product_id": 118 }],
        "channel_id": 1
    });
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(body_json(cart.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(create_client(&server).create_cart("cart-1", cart, None).await);
    assert_eq!(received_query(&server).await, None);
}

#[tokio::test]
async fn test_create_cart_with_redirect_urls() {
    let server = MockServer::start().await;
    let cart = json!({ "line_items": [{ "quantity": 1, "product_id": 77 }] });
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/carts/cart-1"))
        .and(query_param("include", "redirect_urls"))
        .and(body_json(cart.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .create_cart_with_redirect_urls("cart-1", cart, None)
            .await
    );
}

#[tokio::test]
async fn test_add_line_items_to_cart() {
    let server = MockServer::start().await;
    let items = json!({ "line_items": [{ "quantity": 1, "product_id": 80 }] });
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/carts/cart-1/items"))
        .and(body_json(items.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .add_line_items_to_cart("cart-1", items, None)
            .await
    );
}

#[tokio::test]
async fn test_update_cart_line_item() {
    let server = MockServer::start().await;
    let item = json!({ "line_item": { "quantity": 3, "product_id": 80 } });
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/carts/cart-1/items/item-9"))
        .and(body_json(item.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .update_cart_line_item("cart-1", "item-9", item, None)
            .await
    );
}

#[tokio::test]
async fn test_remove_line_item_from_cart() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/carts/cart-1/items/item-9"))
        .and(query_param("include", "redirect_urls"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new().include("redirect_urls");
    let body = assert_ok!(
        create_client(&server)
            .remove_line_item_from_cart("cart-1", "item-9", Some(&params))
            .await
    );
    assert_eq!(body, json!({}));
}

// ============================================================================
// Checkouts
// ============================================================================

#[tokio::test]
async fn test_get_checkout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/checkouts/chk-1"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(create_client(&server).get_checkout("chk-1", None).await);
}

#[tokio::test]
async fn test_get_checkout_with_option_selections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/checkouts/chk-1"))
        .and(query_param("include", OPTION_SELECTIONS))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .get_checkout_with_option_selections("chk-1", None)
            .await
    );
}

#[tokio::test]
async fn test_get_checkout_with_shipping_options_keeps_other_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/checkouts/chk-1"))
        .and(query_param(
            "include",
            "consignments.available_shipping_options,line_items.physical_items.options",
        ))
        .and(query_param("page", "2"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new()
        .param("include", "line_items.physical_items.options")
        .param("page", "2");
    assert_ok!(
        create_client(&server)
            .get_checkout_with_shipping_options("chk-1", Some(&params))
            .await
    );
}

#[tokio::test]
async fn test_add_checkout_billing_address() {
    let server = MockServer::start().await;
    let address = json!({ "email": "jane@example.com", "country_code": "US" });
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/billing-address"))
        .and(body_json(address.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .add_checkout_billing_address("chk-1", address, None)
            .await
    );
}

#[tokio::test]
async fn test_update_checkout_billing_address() {
    let server = MockServer::start().await;
    let address = json!({ "city": "Austin" });
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/billing-address/addr-3"))
        .and(body_json(address.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .update_checkout_billing_address("chk-1", "addr-3", address, None)
            .await
    );
}

#[tokio::test]
async fn test_add_consignments_to_checkout() {
    let server = MockServer::start().await;
    let consignments = json!([{
        "shipping_address": { "country_code": "US" },
        "line_items": [{ "item_id": "item-9", "quantity": 1 }]
    }]);
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/consignments"))
        .and(query_param(
            "include",
            "consignments.available_shipping_options",
        ))
        .and(body_json(consignments.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    let params = RequestParams::new().include("consignments.available_shipping_options");
    assert_ok!(
        create_client(&server)
            .add_consignments_to_checkout("chk-1", consignments, Some(&params))
            .await
    );
}

#[tokio::test]
async fn test_update_checkout_consignment() {
    let server = MockServer::start().await;
    let consignment = json!({ "shipping_option_id": "opt-1" });
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/consignments/con-5"))
        .and(body_json(consignment.clone()))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .update_checkout_consignment("chk-1", "con-5", consignment, None)
            .await
    );
}

#[tokio::test]
async fn test_delete_checkout_consignment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/consignments/con-5"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .delete_checkout_consignment("chk-1", "con-5", None)
            .await
    );
}

#[tokio::test]
async fn test_add_checkout_coupon() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/coupons"))
        .and(body_json(json!({ "coupon_code": "SAVE10" })))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .add_checkout_coupon("chk-1", "SAVE10", None)
            .await
    );
}

#[tokio::test]
async fn test_delete_checkout_coupon_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/coupons/SAVE10"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .delete_checkout_coupon("chk-1", "SAVE10", None)
            .await
    );

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_convert_checkout_to_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/orders"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 1001 } })))
        .expect(1)
        .mount(&server)
        .await;

    let body = assert_ok!(
        create_client(&server)
            .convert_checkout_to_order("chk-1", None)
            .await
    );
    assert_eq!(body["data"]["id"], 1001);
}

#[tokio::test]
async fn test_path_segments_are_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/coupons/10%25OFF"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        create_client(&server)
            .delete_checkout_coupon("chk-1", "10%OFF", None)
            .await
    );
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_api_error_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/checkouts/chk-1/coupons"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-7")
                .set_body_json(json!({
                    "status": 422,
                    "title": "Coupon code is invalid",
                    "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes"
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = create_client(&server)
        .add_checkout_coupon("chk-1", "NOPE", None)
        .await
        .unwrap_err();

    match error {
        CheckoutError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 422);
            assert!(e.message.contains("Coupon code is invalid"));
            assert_eq!(e.error_reference.as_deref(), Some("req-7"));
        }
        other => panic!("Expected Http response error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/checkouts/chk-1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let error = create_client(&server)
        .get_checkout("chk-1", None)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), r#"HTTP 502: {"raw_body":"Bad Gateway"}"#);
}
