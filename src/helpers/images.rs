//! Product images.

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::{make_paginated_request, make_request};
use crate::rest::resources::{ProductImage, ProductImageListParams};
use crate::rest::RestResource;

/// Returns every image of a product.
///
/// # Errors
///
/// Returns the REST-layer error if a page fails. An unknown product is
/// reported as [`ResourceError::NotFound`](crate::rest::ResourceError::NotFound)
/// inside [`Error::Resource`].
pub async fn get_images_for_product(
    client: &RestClient,
    product_id: u64,
) -> Result<Vec<ProductImage>, Error> {
    make_paginated_request(
        |p| ProductImage::all_with_parent(client, "product_id", product_id, Some(p)),
        ProductImageListParams::default(),
    )
    .await
}

/// Returns one image of a product.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Image`] if the product or
/// the image does not exist.
pub async fn get_image(
    client: &RestClient,
    product_id: u64,
    image_id: u64,
) -> Result<ProductImage, Error> {
    let response = make_request(
        |image_id: u64| async move {
            ProductImage::find_with_parent(client, "product_id", product_id, image_id, None)
                .await
                .map_err(|e| Error::not_found_as(e, ResourceKind::Image, image_id))
        },
        image_id,
    )
    .await?;

    Ok(response.into_inner())
}
