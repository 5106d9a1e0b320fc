//! HTTP client types for Shopify API communication.
//!
//! This module is the transport layer under the resource types in
//! [`rest`](crate::rest). It builds authenticated requests for one shop and
//! parses the Shopify-specific response headers.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, including the `page_info` cursors
//!   from the `Link` header
//! - [`RestClient`]: path-normalizing `get`/`post`/`put`/`delete` on top of
//!   [`HttpClient`]
//!
//! Requests are never retried. A 429 (throttled) or 5xx response is returned
//! as [`HttpError::Response`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
