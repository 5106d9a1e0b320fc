//! Order resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A line in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the ordered variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The ID of the ordered product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The number of items ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The price per item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The SKU of the ordered variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// An order placed in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The order name shown to the merchant (e.g. "#1001").
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// The sequential order number.
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The payment status (e.g. "paid", "pending").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// The fulfillment status (`null`, "partial" or "fulfilled").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// The total price including taxes and discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// The three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The ordered items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    /// When the order was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the order was closed.
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,

    /// When the order was cancelled.
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl RestResource for Order {
    type Id = u64;
    type FindParams = ();
    type AllParams = OrderListParams;

    const NAME: &'static str = "Order";
    const KEY: &'static str = "order";
    const PLURAL: &'static str = "orders";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "orders/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "orders/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "orders/{id}"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Return only orders with the given IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only orders after the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Filter by status: "open" (Shopify's default), "closed", "cancelled" or "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Filter by financial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Show orders created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show orders created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(OrderListParams { limit, fields });
