//! Error types for the Shopify API helpers.
//!
//! Two layers of errors live here:
//!
//! - [`ConfigError`]: invalid credential values or an unreadable config file
//! - [`Error`]: the crate-level error returned by the session bootstrap,
//!   the request drainer and the resource helpers
//!
//! Errors from the REST layer ([`ResourceError`]) are carried unchanged inside
//! [`Error::Resource`], except where a helper translates them into a
//! domain-specific variant ([`Error::NotFound`], [`Error::Response`]).
//!
//! # Example
//!
//! ```rust
//! use shopify_api_helpers::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use std::fmt;

use thiserror::Error;

use crate::rest::ResourceError;

/// Errors raised while validating credentials or reading the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop URL cannot be empty.
    #[error("Shop URL cannot be empty. Please provide the shop's domain, e.g. 'my-shop.myshopify.com'.")]
    EmptyShopUrl,

    /// Shop URL could not be parsed.
    #[error("Invalid shop URL '{url}'. Expected a host name such as 'my-shop.myshopify.com'.")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2025-10') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide the shop's Admin API access token.")]
    EmptyAccessToken,

    /// The config file exists but could not be read.
    #[error("Failed to read config file '{path}': {message}")]
    ConfigFileRead {
        /// Path of the config file.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// The config file is not valid TOML or has values of the wrong type.
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigFileParse {
        /// Path of the config file.
        path: String,
        /// The underlying parser message.
        message: String,
    },
}

/// The kind of resource a lookup was made for.
///
/// Carried by [`Error::NotFound`] so callers can tell which lookup failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A product.
    Product,
    /// A product variant.
    Variant,
    /// An inventory item.
    InventoryItem,
    /// An order.
    Order,
    /// A location.
    Location,
    /// A product image.
    Image,
    /// A fulfillment.
    Fulfillment,
    /// A custom collection.
    CustomCollection,
    /// A smart collection.
    SmartCollection,
    /// A collect (product/collection association).
    Collect,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Product => "Product",
            Self::Variant => "Variant",
            Self::InventoryItem => "Inventory Item",
            Self::Order => "Order",
            Self::Location => "Location",
            Self::Image => "Image",
            Self::Fulfillment => "Fulfillment",
            Self::CustomCollection => "Custom Collection",
            Self::SmartCollection => "Smart Collection",
            Self::Collect => "Collect",
        };
        f.write_str(name)
    }
}

/// Errors returned by the session bootstrap, the drainer and the helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// The credential set was still incomplete after searching for a config file.
    #[error("SHOP_URL, API_VERSION and API_PASSWORD must be set.")]
    LoginCredentialsNotSet,

    /// The pagination cursor never reported the last page.
    #[error("Too many pages requested (stopped after {max_pages} requests).")]
    TooManyPageRequests {
        /// The number of requests made before giving up.
        max_pages: usize,
    },

    /// A requested resource does not exist.
    #[error("{kind} with ID {id} not found.")]
    NotFound {
        /// The kind of resource that was requested.
        kind: ResourceKind,
        /// The identifier that was requested.
        id: String,
    },

    /// A create, update, delete or set operation did not succeed.
    #[error("Request failed: {message}")]
    Response {
        /// Description of the failure.
        message: String,
    },

    /// A backend was used while no session was active.
    #[error("No active Shopify API session. Enter a ShopifyApiSession first.")]
    NoActiveSession,

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error from the REST layer.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl Error {
    /// Translates a REST-layer error from a lookup into [`Error::NotFound`].
    ///
    /// Any other error is wrapped unchanged.
    #[must_use]
    pub fn not_found_as(error: ResourceError, kind: ResourceKind, id: impl ToString) -> Self {
        match error {
            ResourceError::NotFound { .. } => Self::NotFound {
                kind,
                id: id.to_string(),
            },
            other => Self::Resource(other),
        }
    }

    /// Translates a REST-layer error from a mutation into [`Error::Response`].
    ///
    /// Every failure of a create, update, delete or set counts, including
    /// network errors and bodies that could not be decoded. Helpers that
    /// report a missing target as [`Error::NotFound`] match on
    /// [`ResourceError::NotFound`] before calling this.
    #[must_use]
    pub fn response_failure(error: ResourceError) -> Self {
        Self::Response {
            message: error.to_string(),
        }
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<ConfigError>();
};
