//! # Shopify API Helpers
//!
//! Session bootstrap and pagination draining for the Shopify Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - A credential set loaded in code or from a `.shopify_api.toml` file found
//!   by walking up the directory tree, via [`Credentials`]
//! - A scoped session ([`ShopifyApiSession`]) that activates a
//!   [`SessionBackend`] and always clears it again, plus the
//!   [`with_session`] and [`with_session_async`] combinators
//! - A request drainer ([`request::make_paginated_request`]) that follows
//!   `page_info` cursors until the last page, capped at
//!   [`MAX_PAGE_REQUESTS`] calls
//! - Per-resource helpers in [`helpers`] that translate REST-layer failures
//!   into [`Error::NotFound`] and [`Error::Response`]
//! - The REST client layer they run on ([`clients`], [`rest`])
//!
//! ## Quick Start
//!
//! ```toml
//! # .shopify_api.toml
//! SHOP_URL = "my-shop.myshopify.com"
//! API_VERSION = "2025-10"
//! API_PASSWORD = "shpat_..."
//! ```
//!
//! ```rust,ignore
//! use shopify_api_helpers::helpers::products::get_all_products;
//! use shopify_api_helpers::{with_session_async, Credentials, RestBackend};
//!
//! let mut credentials = Credentials::new();
//! let mut backend = RestBackend::new();
//!
//! let products = with_session_async(&mut credentials, &mut backend, async |backend: &RestBackend| {
//!     get_all_products(backend.client()?).await
//! })
//! .await?;
//! ```
//!
//! ## Credentials in Code
//!
//! ```rust
//! use shopify_api_helpers::{Credentials, RestBackend, ShopifyApiSession};
//!
//! let mut credentials = Credentials::new();
//! credentials.set_login(
//!     Some("my-shop.myshopify.com".to_string()),
//!     Some("2025-10".to_string()),
//!     Some("shpat_token".to_string()),
//! );
//!
//! let mut backend = RestBackend::new();
//! {
//!     let session = ShopifyApiSession::enter(&mut credentials, &mut backend).unwrap();
//!     assert!(session.backend().is_active());
//! }
//! assert!(!backend.is_active());
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: one `debug` event per request and per
//! session activation, and a `warn` when draining is cut off or Shopify
//! reports a deprecated call. Install a subscriber to see them.
//!
//! ## Thread Safety
//!
//! [`Session`], [`RestClient`], [`RestBackend`] and the error types are
//! `Send + Sync`.

pub mod clients;
pub mod config;
pub mod error;
pub mod helpers;
pub mod request;
pub mod rest;
pub mod session;

pub use config::{AccessToken, ApiVersion, Credentials, ShopUrl};
pub use error::{ConfigError, Error, ResourceKind};
pub use request::{make_paginated_request, make_request, Page, PageParams, MAX_PAGE_REQUESTS};
pub use session::{
    with_session, with_session_async, wrap_session, RestBackend, Session, SessionBackend,
    ShopifyApiSession,
};

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    PaginationInfo, RestClient, RestError,
};
pub use rest::{ResourceError, ResourceResponse, RestResource};
