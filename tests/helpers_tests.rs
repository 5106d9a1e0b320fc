//! Integration tests for the per-resource helpers.
//!
//! Each test mounts the Shopify endpoints it needs on a wiremock server and
//! checks how the helper translates the responses.

use serde_json::json;
use shopify_api_helpers::helpers::collections::{
    add_product_to_collection, get_custom_collection, get_smart_collection,
    remove_product_from_collection,
};
use shopify_api_helpers::helpers::fulfillment::{create_fulfill_order, get_fulfillment};
use shopify_api_helpers::helpers::images::{get_image, get_images_for_product};
use shopify_api_helpers::helpers::locations::{get_inventory_locations, get_location};
use shopify_api_helpers::helpers::orders::get_all_orders;
use shopify_api_helpers::helpers::products::{
    get_all_variants, get_inventory_item, get_product, get_variant, set_stock_level,
    update_variant_stock,
};
use shopify_api_helpers::rest::resources::Variant;
use shopify_api_helpers::{
    AccessToken, ApiVersion, Error, ResourceKind, RestClient, Session, ShopUrl,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API: &str = "/admin/api/2025-10";

fn create_client(server: &MockServer) -> RestClient {
    let session = Session::new(
        ShopUrl::new(server.uri()).unwrap(),
        ApiVersion::LATEST,
        AccessToken::new("shpat_test").unwrap(),
    );
    RestClient::new(&session).unwrap()
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"}))
}

// ============================================================================
// Lookups
// ============================================================================

#[tokio::test]
async fn test_get_product_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products/404.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let error = get_product(&create_client(&server), 404).await.unwrap_err();

    assert!(matches!(
        &error,
        Error::NotFound { kind: ResourceKind::Product, id } if id == "404"
    ));
    assert_eq!(error.to_string(), "Product with ID 404 not found.");
}

#[tokio::test]
async fn test_get_variant_not_found_names_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/variants/7.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let error = get_variant(&create_client(&server), 7).await.unwrap_err();

    assert!(matches!(
        error,
        Error::NotFound {
            kind: ResourceKind::Variant,
            ..
        }
    ));
}

#[tokio::test]
async fn test_get_inventory_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/inventory_items/808950810.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_item": {"id": 808950810, "sku": "IPOD2008PINK", "tracked": true}
        })))
        .mount(&server)
        .await;

    let item = get_inventory_item(&create_client(&server), 808_950_810)
        .await
        .unwrap();

    assert_eq!(item.id, Some(808_950_810));
    assert_eq!(item.sku.as_deref(), Some("IPOD2008PINK"));
}

#[tokio::test]
async fn test_lookup_server_error_is_not_translated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products/1.json")))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"errors": "Unavailable"})))
        .mount(&server)
        .await;

    let error = get_product(&create_client(&server), 1).await.unwrap_err();

    assert!(matches!(error, Error::Resource(_)));
}

#[tokio::test]
async fn test_collection_lookups_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/custom_collections/5.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/smart_collections/6.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert!(matches!(
        get_custom_collection(&client, 5).await,
        Err(Error::NotFound {
            kind: ResourceKind::CustomCollection,
            ..
        })
    ));
    assert!(matches!(
        get_smart_collection(&client, 6).await,
        Err(Error::NotFound {
            kind: ResourceKind::SmartCollection,
            ..
        })
    ));
}

#[tokio::test]
async fn test_nested_and_location_lookups_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/locations/3.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products/1/images/4.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/orders/2/fulfillments/5.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert!(matches!(
        get_location(&client, 3).await,
        Err(Error::NotFound { kind: ResourceKind::Location, ref id }) if id == "3"
    ));
    assert!(matches!(
        get_image(&client, 1, 4).await,
        Err(Error::NotFound { kind: ResourceKind::Image, ref id }) if id == "4"
    ));
    assert!(matches!(
        get_fulfillment(&client, 2, 5).await,
        Err(Error::NotFound { kind: ResourceKind::Fulfillment, ref id }) if id == "5"
    ));
}

#[tokio::test]
async fn test_get_image_uses_product_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products/632910392/images/850703190.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "image": {"id": 850703190, "product_id": 632910392, "position": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = get_image(&create_client(&server), 632_910_392, 850_703_190)
        .await
        .unwrap();

    assert_eq!(image.id, Some(850_703_190));
    assert_eq!(image.product_id, Some(632_910_392));
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_get_all_variants_flattens_products() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products.json")))
        .and(query_param("fields", "id,variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"id": 1, "variants": [{"id": 11, "product_id": 1}, {"id": 12, "product_id": 1}]},
                {"id": 2, "variants": [{"id": 21, "product_id": 2}]},
                {"id": 3}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let variants = get_all_variants(&create_client(&server)).await.unwrap();

    let ids: Vec<_> = variants.iter().filter_map(|v| v.id).collect();
    assert_eq!(ids, vec![11, 12, 21]);
}

#[tokio::test]
async fn test_get_all_orders_requests_any_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/orders.json")))
        .and(query_param("status", "any"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [
                {"id": 450789469, "name": "#1001", "financial_status": "paid"},
                {"id": 450789470, "name": "#1002", "cancelled_at": "2025-01-02T03:04:05Z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orders = get_all_orders(&create_client(&server)).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].name.as_deref(), Some("#1001"));
    assert!(orders[1].cancelled_at.is_some());
}

#[tokio::test]
async fn test_get_images_for_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/products/632910392/images.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [
                {"id": 850703190, "product_id": 632910392, "position": 1},
                {"id": 562641783, "product_id": 632910392, "position": 2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let images = get_images_for_product(&create_client(&server), 632_910_392)
        .await
        .unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[1].position, Some(2));
}

#[tokio::test]
async fn test_get_inventory_locations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [
                {"id": 487838322, "name": "Fifth Avenue", "active": true},
                {"id": 655441491, "name": "Warehouse", "active": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let locations = get_inventory_locations(&create_client(&server)).await.unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[1].active, Some(false));
}

#[tokio::test]
async fn test_get_inventory_locations_follows_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .and(query_param("page_info", "c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [{"id": 655441491, "name": "Warehouse"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    r#"<https://test-shop.myshopify.com/admin/api/2025-10/locations.json?limit=250&page_info=c2>; rel="next""#,
                )
                .set_body_json(json!({
                    "locations": [{"id": 487838322, "name": "Fifth Avenue"}]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let locations = get_inventory_locations(&create_client(&server)).await.unwrap();

    let ids: Vec<_> = locations.iter().filter_map(|l| l.id).collect();
    assert_eq!(ids, vec![487_838_322, 655_441_491]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

// ============================================================================
// Stock Levels
// ============================================================================

#[tokio::test]
async fn test_set_stock_level_posts_level() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .and(body_json(json!({
            "inventory_item_id": 808950810,
            "location_id": 655441491,
            "available": 42
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {
                "inventory_item_id": 808950810,
                "location_id": 655441491,
                "available": 42
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let level = set_stock_level(&create_client(&server), 655_441_491, 808_950_810, 42)
        .await
        .unwrap();

    assert_eq!(level.available, Some(42));
}

#[tokio::test]
async fn test_set_stock_level_rejection_is_a_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Inventory item does not have inventory tracking enabled"]
        })))
        .mount(&server)
        .await;

    let error = set_stock_level(&create_client(&server), 1, 2, 3)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Response { .. }));
}

#[tokio::test]
async fn test_update_variant_stock_records_quantity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory_level": {"inventory_item_id": 99, "location_id": 5, "available": 7}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut variant = Variant {
        id: Some(1),
        inventory_item_id: Some(99),
        inventory_quantity: Some(3),
        ..Default::default()
    };

    update_variant_stock(&create_client(&server), &mut variant, 5, 7)
        .await
        .unwrap();

    assert_eq!(variant.inventory_quantity, Some(7));
}

#[tokio::test]
async fn test_update_variant_stock_keeps_quantity_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"available": ["must be a number"]}
        })))
        .mount(&server)
        .await;

    let mut variant = Variant {
        id: Some(1),
        inventory_item_id: Some(99),
        inventory_quantity: Some(3),
        ..Default::default()
    };

    let result = update_variant_stock(&create_client(&server), &mut variant, 5, 7).await;

    assert!(matches!(result, Err(Error::Response { .. })));
    assert_eq!(variant.inventory_quantity, Some(3));
}

#[tokio::test]
async fn test_update_variant_stock_without_inventory_item() {
    let server = MockServer::start().await;
    let mut variant = Variant {
        id: Some(1),
        ..Default::default()
    };

    let result = update_variant_stock(&create_client(&server), &mut variant, 5, 7).await;

    assert!(matches!(result, Err(Error::Response { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Fulfillment
// ============================================================================

#[tokio::test]
async fn test_create_fulfill_order_posts_location() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/orders/450789469/fulfillments.json")))
        .and(body_json(json!({"fulfillment": {"location_id": 655441491}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "fulfillment": {
                "id": 255858046,
                "order_id": 450789469,
                "location_id": 655441491,
                "status": "success"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fulfillment = create_fulfill_order(&create_client(&server), 450_789_469, 655_441_491)
        .await
        .unwrap();

    assert_eq!(fulfillment.id, Some(255_858_046));
    assert_eq!(fulfillment.order_id, Some(450_789_469));
}

#[tokio::test]
async fn test_create_fulfill_order_missing_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/orders/1/fulfillments.json")))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let error = create_fulfill_order(&create_client(&server), 1, 2)
        .await
        .unwrap_err();

    assert!(matches!(
        &error,
        Error::NotFound { kind: ResourceKind::Order, id } if id == "1"
    ));
}

// ============================================================================
// Collection Membership
// ============================================================================

#[tokio::test]
async fn test_add_product_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/collects.json")))
        .and(body_json(json!({
            "collect": {"product_id": 921728736, "collection_id": 841564295}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "collect": {"id": 1071559575, "product_id": 921728736, "collection_id": 841564295}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let collect = add_product_to_collection(&create_client(&server), 921_728_736, 841_564_295)
        .await
        .unwrap();

    assert_eq!(collect.id, Some(1_071_559_575));
}

#[tokio::test]
async fn test_add_product_already_in_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/collects.json")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"product_id": ["already exists in this collection"]}
        })))
        .mount(&server)
        .await;

    let error = add_product_to_collection(&create_client(&server), 1, 2)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Response { .. }));
}

#[tokio::test]
async fn test_remove_product_from_collection_deletes_collect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/collects.json")))
        .and(query_param("product_id", "921728736"))
        .and(query_param("collection_id", "841564295"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collects": [{"id": 455204334, "product_id": 921728736, "collection_id": 841564295}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{API}/collects/455204334.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    remove_product_from_collection(&create_client(&server), 921_728_736, 841_564_295)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_product_not_in_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{API}/collects.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"collects": []})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let error = remove_product_from_collection(&create_client(&server), 1, 2)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        Error::NotFound {
            kind: ResourceKind::Collect,
            ..
        }
    ));
}

#[tokio::test]
async fn test_remove_product_delete_failure_without_status() {
    let server = MockServer::start().await;
    // A collect without an ID cannot be addressed, so the delete fails
    // before any request is sent
    Mock::given(method("GET"))
        .and(path(format!("{API}/collects.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collects": [{"product_id": 1, "collection_id": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let error = remove_product_from_collection(&create_client(&server), 1, 2)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Response { .. }));
}

#[tokio::test]
async fn test_add_product_to_collection_undecodable_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{API}/collects.json")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"unexpected": {}})))
        .mount(&server)
        .await;

    let error = add_product_to_collection(&create_client(&server), 1, 2)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Response { .. }));
}
