//! Fulfillment resource.
//!
//! Fulfillments are nested under their order. Marking an order as fulfilled
//! from a location is done with [`Fulfillment::create`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// The status of a fulfillment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// The fulfillment is pending.
    #[default]
    Pending,
    /// The fulfillment is open.
    Open,
    /// The fulfillment was successful.
    Success,
    /// The fulfillment was cancelled.
    Cancelled,
    /// There was an error with the fulfillment.
    Error,
    /// The fulfillment failed.
    Failure,
}

/// A shipment of some or all of an order's items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Fulfillment {
    /// The unique identifier of the fulfillment.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the fulfilled order.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// The fulfillment name (e.g. "#1001.1").
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// The status of the fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FulfillmentStatus>,

    /// The ID of the location the items ship from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// The tracking company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    /// The tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// When the fulfillment was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the fulfillment was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Fulfillment {
    /// Fulfills an order from a location.
    ///
    /// Sends `POST orders/{order_id}/fulfillments.json` and returns the
    /// created fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order does not exist, or
    /// [`ResourceError::ValidationFailed`] if it cannot be fulfilled from the
    /// location.
    pub async fn create(
        client: &RestClient,
        order_id: u64,
        location_id: u64,
    ) -> Result<Self, ResourceError> {
        let path = format!("orders/{order_id}/fulfillments");
        let body = json!({
            "fulfillment": {
                "location_id": location_id
            }
        });

        let order_id = order_id.to_string();
        let response = client
            .post(&path, body, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, "Order", Some(&order_id)))?;

        let fulfillment: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY, Self::NAME)?;
        Ok(fulfillment.into_inner())
    }
}

impl RestResource for Fulfillment {
    type Id = u64;
    type FindParams = ();
    type AllParams = FulfillmentListParams;

    const NAME: &'static str = "Fulfillment";
    const KEY: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["order_id", "id"],
            "orders/{order_id}/fulfillments/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["order_id"],
            "orders/{order_id}/fulfillments",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing an order's fulfillments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentListParams {
    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only fulfillments after the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(FulfillmentListParams { limit, fields });
