//! REST API client for the Shopify Admin API.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with
//! `get()`, `post()`, `put()` and `delete()` methods that take resource paths
//! such as `products` or `orders/450789469/fulfillments`.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products`
//! - A trailing `.json` is stripped and re-added: `products.json` -> `products.json`
//! - An empty path is rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
