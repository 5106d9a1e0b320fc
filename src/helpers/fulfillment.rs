//! Fulfillments.

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::make_request;
use crate::rest::resources::Fulfillment;
use crate::rest::{ResourceError, RestResource};

/// Marks an order as fulfilled from a location.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Order`] if the order does
/// not exist and [`Error::Response`] for any other failure.
pub async fn create_fulfill_order(
    client: &RestClient,
    order_id: u64,
    location_id: u64,
) -> Result<Fulfillment, Error> {
    make_request(
        |(order_id, location_id)| async move {
            Fulfillment::create(client, order_id, location_id)
                .await
                .map_err(|e| match e {
                    ResourceError::NotFound { .. } => Error::NotFound {
                        kind: ResourceKind::Order,
                        id: order_id.to_string(),
                    },
                    other => Error::response_failure(other),
                })
        },
        (order_id, location_id),
    )
    .await
}

/// Returns one fulfillment of an order.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Fulfillment`] if the order
/// or the fulfillment does not exist.
pub async fn get_fulfillment(
    client: &RestClient,
    order_id: u64,
    fulfillment_id: u64,
) -> Result<Fulfillment, Error> {
    let response = make_request(
        |fulfillment_id: u64| async move {
            Fulfillment::find_with_parent(client, "order_id", order_id, fulfillment_id, None)
                .await
                .map_err(|e| Error::not_found_as(e, ResourceKind::Fulfillment, fulfillment_id))
        },
        fulfillment_id,
    )
    .await?;

    Ok(response.into_inner())
}
