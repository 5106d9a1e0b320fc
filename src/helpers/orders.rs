//! Orders.

use crate::clients::RestClient;
use crate::error::Error;
use crate::request::make_paginated_request;
use crate::rest::resources::{Order, OrderListParams};
use crate::rest::RestResource;

use super::PAGE_LIMIT;

/// Returns every order in the store, whatever its status.
///
/// Shopify lists only open orders unless asked otherwise, so the first page
/// is requested with `status=any`.
///
/// # Errors
///
/// Returns [`Error::TooManyPageRequests`] if the listing never ends, or the
/// REST-layer error of the failing page.
pub async fn get_all_orders(client: &RestClient) -> Result<Vec<Order>, Error> {
    let params = OrderListParams {
        limit: Some(PAGE_LIMIT),
        status: Some("any".to_string()),
        ..Default::default()
    };

    make_paginated_request(|p| Order::all(client, Some(p)), params).await
}
