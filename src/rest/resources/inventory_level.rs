//! `InventoryLevel` resource.
//!
//! An inventory level is the stock of one inventory item at one location.
//! It has no `id` of its own; the pair (`inventory_item_id`, `location_id`)
//! identifies it. Setting stock goes through [`InventoryLevel::set`] rather
//! than `save()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// The available stock of an inventory item at a location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevel {
    /// The ID of the inventory item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// The ID of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// The quantity available for sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,

    /// When the level was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryLevel {
    /// Sets the available quantity of an inventory item at a location.
    ///
    /// Sends `POST inventory_levels/set.json` and returns the stored level.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// quantity or the item is not stocked at the location.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let level = InventoryLevel::set(&client, 808950810, 655441491, 42).await?;
    /// assert_eq!(level.available, Some(42));
    /// ```
    pub async fn set(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
    ) -> Result<Self, ResourceError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available": available
        });

        let response = client
            .post("inventory_levels/set", body, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        let level: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY, Self::NAME)?;
        Ok(level.into_inner())
    }
}

impl RestResource for InventoryLevel {
    type Id = String;
    type FindParams = ();
    type AllParams = InventoryLevelListParams;

    const NAME: &'static str = "InventoryLevel";
    const KEY: &'static str = "inventory_level";
    const PLURAL: &'static str = "inventory_levels";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "inventory_levels",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        None
    }
}

/// Parameters for listing inventory levels.
///
/// Shopify requires `inventory_item_ids` or `location_ids` on the first page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelListParams {
    /// Comma-separated inventory item IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_ids: Option<String>,

    /// Comma-separated location IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<String>,

    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(InventoryLevelListParams { limit });
