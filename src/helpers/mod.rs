//! Per-resource helpers.
//!
//! Each helper is a thin call site over [`make_request`] or
//! [`make_paginated_request`]: it picks the resource call and its parameters
//! and translates REST-layer errors into the crate's [`Error`]:
//!
//! - a lookup of a missing resource becomes [`Error::NotFound`] with the
//!   matching [`ResourceKind`]
//! - any failed create, update, delete or set becomes [`Error::Response`]
//!
//! All helpers take the [`RestClient`] of an active session, usually
//! obtained from [`RestBackend::client`](crate::RestBackend::client).
//!
//! ```rust,ignore
//! use shopify_api_helpers::helpers::{locations, products};
//!
//! let client = backend.client()?;
//! let location = &locations::get_inventory_locations(client).await?[0];
//! let mut variant = products::get_variant(client, 808950810).await?;
//! products::update_variant_stock(client, &mut variant, location.id.unwrap_or_default(), 12).await?;
//! ```

pub mod collections;
pub mod fulfillment;
pub mod images;
pub mod locations;
pub mod orders;
pub mod products;

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::make_request;
use crate::rest::RestResource;

/// Page size requested by the draining helpers (Shopify's maximum).
pub const PAGE_LIMIT: u32 = 250;

/// Fetches one resource by ID, reporting a 404 as [`Error::NotFound`].
async fn find_resource<R: RestResource>(
    client: &RestClient,
    id: R::Id,
    kind: ResourceKind,
) -> Result<R, Error> {
    let response = make_request(
        |id: R::Id| async move {
            let requested = id.clone();
            R::find(client, id, None)
                .await
                .map_err(|e| Error::not_found_as(e, kind, requested))
        },
        id,
    )
    .await?;

    Ok(response.into_inner())
}
