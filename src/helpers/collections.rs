//! Custom collections, smart collections and collects.
//!
//! Products are added to and removed from custom collections by creating and
//! deleting [`Collect`] records. Smart collections pick their products from
//! rules and cannot be edited this way.

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::{make_paginated_request, make_request};
use crate::rest::resources::{
    Collect, CollectListParams, CustomCollection, CustomCollectionListParams, SmartCollection,
    SmartCollectionListParams,
};
use crate::rest::{ResourceError, RestResource};

use super::{find_resource, PAGE_LIMIT};

/// Returns every custom collection.
///
/// # Errors
///
/// Returns [`Error::TooManyPageRequests`] if the listing never ends, or the
/// REST-layer error of the failing page.
pub async fn get_custom_collections(client: &RestClient) -> Result<Vec<CustomCollection>, Error> {
    let params = CustomCollectionListParams {
        limit: Some(PAGE_LIMIT),
        ..Default::default()
    };

    make_paginated_request(|p| CustomCollection::all(client, Some(p)), params).await
}

/// Returns every smart collection.
///
/// # Errors
///
/// Same as [`get_custom_collections`].
pub async fn get_smart_collections(client: &RestClient) -> Result<Vec<SmartCollection>, Error> {
    let params = SmartCollectionListParams {
        limit: Some(PAGE_LIMIT),
        ..Default::default()
    };

    make_paginated_request(|p| SmartCollection::all(client, Some(p)), params).await
}

/// Returns the custom collection with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::CustomCollection`] if it
/// does not exist.
pub async fn get_custom_collection(
    client: &RestClient,
    collection_id: u64,
) -> Result<CustomCollection, Error> {
    find_resource(client, collection_id, ResourceKind::CustomCollection).await
}

/// Returns the smart collection with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::SmartCollection`] if it
/// does not exist.
pub async fn get_smart_collection(
    client: &RestClient,
    collection_id: u64,
) -> Result<SmartCollection, Error> {
    find_resource(client, collection_id, ResourceKind::SmartCollection).await
}

/// Returns every collect of a custom collection, one per member product.
///
/// # Errors
///
/// Same as [`get_custom_collections`].
pub async fn get_collects_for_collection(
    client: &RestClient,
    collection_id: u64,
) -> Result<Vec<Collect>, Error> {
    let params = CollectListParams {
        limit: Some(PAGE_LIMIT),
        collection_id: Some(collection_id),
        ..Default::default()
    };

    make_paginated_request(|p| Collect::all(client, Some(p)), params).await
}

/// Adds a product to a custom collection and returns the new collect.
///
/// # Errors
///
/// Returns [`Error::Response`] if the collect cannot be created, e.g. because
/// the product is already in the collection.
pub async fn add_product_to_collection(
    client: &RestClient,
    product_id: u64,
    collection_id: u64,
) -> Result<Collect, Error> {
    let collect = Collect {
        product_id: Some(product_id),
        collection_id: Some(collection_id),
        ..Default::default()
    };

    make_request(
        |collect: Collect| async move {
            collect
                .save(client)
                .await
                .map_err(Error::response_failure)
        },
        collect,
    )
    .await
}

/// Removes a product from a custom collection.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Collect`] if the product
/// is not in the collection, and [`Error::Response`] if the delete fails for
/// any other reason.
pub async fn remove_product_from_collection(
    client: &RestClient,
    product_id: u64,
    collection_id: u64,
) -> Result<(), Error> {
    let params = CollectListParams {
        product_id: Some(product_id),
        collection_id: Some(collection_id),
        ..Default::default()
    };
    let missing = || Error::NotFound {
        kind: ResourceKind::Collect,
        id: format!("product {product_id} in collection {collection_id}"),
    };

    let response = make_request(|p| Collect::all(client, Some(p)), params).await?;
    let collect = response.into_inner().into_iter().next().ok_or_else(missing)?;

    make_request(
        |collect: Collect| async move {
            collect.delete(client).await.map_err(|e| match e {
                ResourceError::NotFound { .. } => missing(),
                other => Error::response_failure(other),
            })
        },
        collect,
    )
    .await
}
