//! REST resource layer for the Shopify Admin API.
//!
//! - [`RestResource`]: `find`/`all`/`save`/`delete` driven by per-resource
//!   URL templates
//! - [`ResourceResponse<T>`]: a Deref wrapper carrying the `page_info`
//!   cursor, which makes list responses drainable with
//!   [`make_paginated_request`](crate::request::make_paginated_request)
//! - [`ResourcePath`], [`get_path`], [`build_path`]: path selection for
//!   nested and standalone resources
//! - [`ResourceError`]: 404 and 422 mapped to semantic variants
//! - [`resources`]: the resource models used by the helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_api_helpers::rest::resources::Product;
//! use shopify_api_helpers::rest::RestResource;
//!
//! let response = Product::all(&client, None).await?;
//! for product in response.iter() {
//!     println!("- {:?}", product.title);
//! }
//!
//! if let Some(cursor) = response.next_page_info() {
//!     // fetch the next page with `page_info = cursor`
//! }
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
