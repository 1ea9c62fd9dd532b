//! Customer authentication for storefront redirects.
//!
//! # Overview
//!
//! - [`TokenIssuer`]: Mints a [`LoginToken`] for a customer and channel
//! - [`CustomerLoginJwtIssuer`]: Signs tokens locally as HS256 JWTs using the
//!   API client secret
//! - [`LoginTokenOptions`]: Redirect target, request IP and extra claims
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_checkout::{CustomerLoginJwtIssuer, LoginTokenOptions, TokenIssuer};
//!
//! let issuer = CustomerLoginJwtIssuer::new(&config)?;
//! let token = issuer
//!     .issue_login_token(42, 1, &LoginTokenOptions::new().redirect_to("/checkout"))
//!     .await?;
//! let url = format!("https://shop.example/login/token/{token}");
//! ```

mod login_token;

pub use login_token::{
    CustomerLoginJwtIssuer, LoginToken, LoginTokenError, LoginTokenOptions, TokenIssuer,
    CUSTOMER_LOGIN_OPERATION,
};
