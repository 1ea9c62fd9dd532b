//! Resource paths for carts and checkouts.
//!
//! Identifiers are percent-encoded as single path segments.

use crate::config::{BASE_CART_PATH, BASE_CHECKOUT_PATH};

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

pub fn cart(cart_id: &str) -> String {
    format!("{BASE_CART_PATH}/{}", segment(cart_id))
}

pub fn cart_redirect_urls(cart_id: &str) -> String {
    format!("{}/redirect_urls", cart(cart_id))
}

pub fn cart_items(cart_id: &str) -> String {
    format!("{}/items", cart(cart_id))
}

pub fn cart_item(cart_id: &str, item_id: &str) -> String {
    format!("{}/{}", cart_items(cart_id), segment(item_id))
}

pub fn checkout(checkout_id: &str) -> String {
    format!("{BASE_CHECKOUT_PATH}/{}", segment(checkout_id))
}

pub fn billing_address(checkout_id: &str) -> String {
    format!("{}/billing-address", checkout(checkout_id))
}

pub fn billing_address_item(checkout_id: &str, address_id: &str) -> String {
    format!("{}/{}", billing_address(checkout_id), segment(address_id))
}

pub fn consignments(checkout_id: &str) -> String {
    format!("{}/consignments", checkout(checkout_id))
}

pub fn consignment(checkout_id: &str, consignment_id: &str) -> String {
    format!("{}/{}", consignments(checkout_id), segment(consignment_id))
}

pub fn coupons(checkout_id: &str) -> String {
    format!("{}/coupons", checkout(checkout_id))
}

pub fn coupon(checkout_id: &str, coupon_code: &str) -> String {
    format!("{}/{}", coupons(checkout_id), segment(coupon_code))
}

pub fn orders(checkout_id: &str) -> String {
    format!("{}/orders", checkout(checkout_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_paths() {
        assert_eq!(cart("c1"), "/v3/carts/c1");
        assert_eq!(cart_redirect_urls("c1"), "/v3/carts/c1/redirect_urls");
        assert_eq!(cart_items("c1"), "/v3/carts/c1/items");
        assert_eq!(cart_item("c1", "i9"), "/v3/carts/c1/items/i9");
    }

    #[test]
    fn test_checkout_paths() {
        assert_eq!(checkout("k1"), "/v3/checkouts/k1");
        assert_eq!(billing_address("k1"), "/v3/checkouts/k1/billing-address");
        assert_eq!(
            billing_address_item("k1", "5"),
            "/v3/checkouts/k1/billing-address/5"
        );
        assert_eq!(consignments("k1"), "/v3/checkouts/k1/consignments");
        assert_eq!(consignment("k1", "s2"), "/v3/checkouts/k1/consignments/s2");
        assert_eq!(coupons("k1"), "/v3/checkouts/k1/coupons");
        assert_eq!(coupon("k1", "SAVE10"), "/v3/checkouts/k1/coupons/SAVE10");
        assert_eq!(orders("k1"), "/v3/checkouts/k1/orders");
    }

    #[test]
    fn test_identifiers_are_encoded_as_one_segment() {
        assert_eq!(coupon("k1", "10% OFF"), "/v3/checkouts/k1/coupons/10%25%20OFF");
        assert_eq!(cart("a/b"), "/v3/carts/a%2Fb");
    }
}
