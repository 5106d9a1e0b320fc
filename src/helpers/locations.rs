//! Locations.

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::make_paginated_request;
use crate::rest::resources::{Location, LocationListParams};
use crate::rest::RestResource;

use super::{find_resource, PAGE_LIMIT};

/// Returns every location that can hold inventory.
///
/// # Errors
///
/// Returns [`Error::TooManyPageRequests`] if the listing never ends, or the
/// REST-layer error of the failing page.
pub async fn get_inventory_locations(client: &RestClient) -> Result<Vec<Location>, Error> {
    let params = LocationListParams {
        limit: Some(PAGE_LIMIT),
        ..Default::default()
    };

    make_paginated_request(|p| Location::all(client, Some(p)), params).await
}

/// Returns the location with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Location`] if it does not
/// exist.
pub async fn get_location(client: &RestClient, location_id: u64) -> Result<Location, Error> {
    find_resource(client, location_id, ResourceKind::Location).await
}
