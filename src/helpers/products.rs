//! Products, variants and stock levels.

use crate::clients::RestClient;
use crate::error::{Error, ResourceKind};
use crate::request::{make_paginated_request, make_request};
use crate::rest::resources::{
    InventoryItem, InventoryLevel, Product, ProductListParams, Variant,
};
use crate::rest::RestResource;

use super::{find_resource, PAGE_LIMIT};

/// Returns every product in the store.
///
/// # Errors
///
/// Returns [`Error::TooManyPageRequests`] if the listing never ends, or the
/// REST-layer error of the failing page.
pub async fn get_all_products(client: &RestClient) -> Result<Vec<Product>, Error> {
    let params = ProductListParams {
        limit: Some(PAGE_LIMIT),
        ..Default::default()
    };

    make_paginated_request(|p| Product::all(client, Some(p)), params).await
}

/// Returns every variant in the store, product by product.
///
/// Variants are read from the products listing, where Shopify embeds them,
/// so no request is made per product.
///
/// # Errors
///
/// Same as [`get_all_products`].
pub async fn get_all_variants(client: &RestClient) -> Result<Vec<Variant>, Error> {
    let params = ProductListParams {
        limit: Some(PAGE_LIMIT),
        fields: Some("id,variants".to_string()),
        ..Default::default()
    };

    let products = make_paginated_request(|p| Product::all(client, Some(p)), params).await?;
    Ok(products
        .into_iter()
        .flat_map(|product| product.variants)
        .collect())
}

/// Returns the product with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Product`] if it does not
/// exist.
pub async fn get_product(client: &RestClient, product_id: u64) -> Result<Product, Error> {
    find_resource(client, product_id, ResourceKind::Product).await
}

/// Returns the variant with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::Variant`] if it does not
/// exist.
pub async fn get_variant(client: &RestClient, variant_id: u64) -> Result<Variant, Error> {
    find_resource(client, variant_id, ResourceKind::Variant).await
}

/// Returns the inventory item with the given ID.
///
/// # Errors
///
/// Returns [`Error::NotFound`] with [`ResourceKind::InventoryItem`] if it
/// does not exist.
pub async fn get_inventory_item(
    client: &RestClient,
    inventory_item_id: u64,
) -> Result<InventoryItem, Error> {
    find_resource(client, inventory_item_id, ResourceKind::InventoryItem).await
}

/// Sets the available stock of an inventory item at a location.
///
/// # Errors
///
/// Returns [`Error::Response`] if the level could not be set.
pub async fn set_stock_level(
    client: &RestClient,
    location_id: u64,
    inventory_item_id: u64,
    new_stock_level: i64,
) -> Result<InventoryLevel, Error> {
    make_request(
        |(inventory_item_id, location_id, available)| async move {
            InventoryLevel::set(client, inventory_item_id, location_id, available)
                .await
                .map_err(Error::response_failure)
        },
        (inventory_item_id, location_id, new_stock_level),
    )
    .await
}

/// Sets a variant's stock at a location and records it on the variant.
///
/// `variant.inventory_quantity` is only updated once Shopify has accepted
/// the new level.
///
/// # Errors
///
/// Returns [`Error::Response`] if the variant has no inventory item or
/// Shopify rejects the new level.
pub async fn update_variant_stock(
    client: &RestClient,
    variant: &mut Variant,
    location_id: u64,
    new_stock_level: i64,
) -> Result<InventoryLevel, Error> {
    let inventory_item_id = variant.inventory_item_id.ok_or_else(|| Error::Response {
        message: format!(
            "Variant {} has no inventory item",
            variant.id.map_or_else(|| "without ID".to_string(), |id| id.to_string())
        ),
    })?;

    let level = set_stock_level(client, location_id, inventory_item_id, new_stock_level).await?;
    variant.inventory_quantity = Some(new_stock_level);
    Ok(level)
}
