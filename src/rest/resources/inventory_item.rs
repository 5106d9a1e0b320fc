//! `InventoryItem` resource.
//!
//! Every variant has exactly one inventory item, referenced by the variant's
//! `inventory_item_id`. Stock itself is not stored here but on the
//! per-location [`InventoryLevel`](super::InventoryLevel).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// An inventory item in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItem {
    /// The unique identifier of the inventory item.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The unit cost, kept as a string to preserve decimal precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    /// Whether inventory levels are tracked for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,

    /// Whether the item requires shipping.
    #[serde(skip_serializing)]
    pub requires_shipping: Option<bool>,

    /// The ISO 3166-1 alpha-2 country code of origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_of_origin: Option<String>,

    /// The harmonized system code for customs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonized_system_code: Option<String>,

    /// When the inventory item was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the inventory item was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for InventoryItem {
    type Id = u64;
    type FindParams = ();
    type AllParams = InventoryItemListParams;

    const NAME: &'static str = "InventoryItem";
    const KEY: &'static str = "inventory_item";
    const PLURAL: &'static str = "inventory_items";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "inventory_items/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "inventory_items"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "inventory_items/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing inventory items.
///
/// Shopify requires `ids` on the first page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItemListParams {
    /// The inventory item IDs to fetch (max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(InventoryItemListParams { limit });
