//! Request parameters and `include` composition.
//!
//! Every endpoint helper that asks the API for sub-resources (option
//! selections, redirect URLs, shipping options) merges its own base include
//! set with whatever the caller passed. Includes are a set: duplicates
//! collapse, and the transmitted order carries no meaning.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::clients::Query;

/// Query parameter name for sub-resource includes.
pub const INCLUDE_PARAM: &str = "include";

/// Include token for physical item option selections.
pub const PHYSICAL_ITEM_OPTIONS: &str = "line_items.physical_items.options";

/// Include token for digital item option selections.
pub const DIGITAL_ITEM_OPTIONS: &str = "line_items.digital_items.options";

/// Include token for cart redirect URLs.
pub const REDIRECT_URLS: &str = "redirect_urls";

/// Include token for available shipping options on consignments.
pub const AVAILABLE_SHIPPING_OPTIONS: &str = "consignments.available_shipping_options";

/// A set of `include` tokens.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::IncludeSet;
///
/// let includes: IncludeSet = ["redirect_urls", "line_items.physical_items.options", "redirect_urls"]
///     .into_iter()
///     .collect();
/// assert_eq!(includes.len(), 2);
/// assert_eq!(includes.to_string(), "line_items.physical_items.options,redirect_urls");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncludeSet(BTreeSet<String>);

impl IncludeSet {
    /// Creates an empty include set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Includes for line item option selections.
    #[must_use]
    pub fn option_selections() -> Self {
        [PHYSICAL_ITEM_OPTIONS, DIGITAL_ITEM_OPTIONS]
            .into_iter()
            .collect()
    }

    /// Includes for redirect URLs.
    #[must_use]
    pub fn redirect_urls() -> Self {
        std::iter::once(REDIRECT_URLS).collect()
    }

    /// Includes for available shipping options.
    #[must_use]
    pub fn shipping_options() -> Self {
        std::iter::once(AVAILABLE_SHIPPING_OPTIONS).collect()
    }

    /// Parses a comma separated `include` value. Blank tokens are skipped.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        std::iter::once(value).collect()
    }

    /// Adds a token, or several if `token` is comma separated. Blank tokens
    /// are skipped. Returns `true` if anything new was added.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let before = self.0.len();
        self.0.extend(split_tokens(&token.into()));
        self.0.len() > before
    }

    /// Returns `true` if the token is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Returns the union of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for IncludeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for IncludeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for IncludeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

fn split_tokens(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
}

/// Query parameters for an endpoint call.
///
/// `include` tokens are kept as an [`IncludeSet`]; every other parameter is
/// passed through to the transport untouched.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::RequestParams;
///
/// let params = RequestParams::new()
///     .include("redirect_urls")
///     .param("currency_code", "EUR");
///
/// let query = params.to_query().unwrap();
/// assert_eq!(query["include"], "redirect_urls");
/// assert_eq!(query["currency_code"], "EUR");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestParams {
    include: IncludeSet,
    extra: BTreeMap<String, String>,
}

impl RequestParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `include` token. Comma separated values are split.
    #[must_use]
    pub fn include(mut self, token: impl Into<String>) -> Self {
        self.include.insert(token);
        self
    }

    /// Adds a query parameter. A raw `include` parameter is split on commas
    /// and merged into the include set.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == INCLUDE_PARAM {
            self.include.insert(value);
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Returns the include set.
    #[must_use]
    pub const fn includes(&self) -> &IncludeSet {
        &self.include
    }

    /// Returns a non-`include` parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// Returns a copy with the include set replaced.
    #[must_use]
    pub fn with_includes(&self, include: IncludeSet) -> Self {
        Self {
            include,
            extra: self.extra.clone(),
        }
    }

    /// Converts to transport query parameters. Returns `None` when empty.
    #[must_use]
    pub fn to_query(&self) -> Option<Query> {
        if self.include.is_empty() && self.extra.is_empty() {
            return None;
        }

        let mut query: Query = self
            .extra
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if !self.include.is_empty() {
            query.insert(INCLUDE_PARAM.to_string(), self.include.to_string());
        }
        Some(query)
    }
}

/// Merges a base include set into caller-supplied parameters.
///
/// The result equals `params` (or empty parameters when absent) with its
/// include set replaced by the union of `base` and the caller's includes.
/// Neither input is modified.
#[must_use]
pub fn build_include_params(base: &IncludeSet, params: Option<&RequestParams>) -> RequestParams {
    params.map_or_else(
        || RequestParams::new().with_includes(base.clone()),
        |params| params.with_includes(base.union(params.includes())),
    )
}
