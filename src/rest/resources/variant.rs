//! Variant resource.
//!
//! Variants are listed under their product but can be fetched and updated on
//! their own:
//!
//! - Nested: `products/{product_id}/variants`
//! - Standalone: `variants/{id}`
//!
//! Path selection picks the most specific template for the IDs at hand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A variant of a product (e.g. a size or colour).
///
/// `inventory_item_id` links the variant to the inventory item whose stock
/// is set per location through
/// [`InventoryLevel::set`](super::InventoryLevel::set).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The barcode, UPC, or ISBN number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The position in the product's variant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The ID of the variant's inventory item.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_item_id: Option<u64>,

    /// Total stock across all locations.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,

    /// The value of the first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// When the variant was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Variant {
    type Id = u64;
    type FindParams = VariantFindParams;
    type AllParams = VariantListParams;

    const NAME: &'static str = "Variant";
    const KEY: &'static str = "variant";
    const PLURAL: &'static str = "variants";

    const PATHS: &'static [ResourcePath] = &[
        // Nested paths
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/variants/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/variants",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/variants/{id}",
        ),
        // Standalone paths
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "variants/{id}"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "variants/{id}"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for finding a single variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing variants under a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VariantListParams {
    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only variants after the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(VariantListParams { limit, fields });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_variant_read_only_fields_are_not_serialized() {
        let variant = Variant {
            id: Some(808_950_810),
            product_id: Some(632_910_392),
            sku: Some("IPOD2008PINK".to_string()),
            inventory_item_id: Some(808_950_810),
            inventory_quantity: Some(10),
            ..Default::default()
        };

        let value = serde_json::to_value(&variant).unwrap();
        assert_eq!(value["sku"], "IPOD2008PINK");
        assert!(value.get("id").is_none());
        assert!(value.get("inventory_item_id").is_none());
        assert!(value.get("inventory_quantity").is_none());
    }

    #[test]
    fn test_variant_path_selection() {
        let find = get_path(Variant::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(find.template, "variants/{id}");

        let nested =
            get_path(Variant::PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
        assert_eq!(nested.template, "products/{product_id}/variants/{id}");

        assert!(get_path(Variant::PATHS, ResourceOperation::All, &[]).is_none());
    }
}
