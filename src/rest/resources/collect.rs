//! Collect resource.
//!
//! A collect links one product to one custom collection. Creating a collect
//! adds the product to the collection and deleting it removes the product.
//! Collects cannot be updated.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// The membership of a product in a custom collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collect {
    /// The unique identifier of the collect.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The ID of the custom collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// The position of the product in a manually sorted collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// When the collect was created.
    #[serde(skip_serializing)]
    pub created_at: Option<String>,
}

impl RestResource for Collect {
    type Id = u64;
    type FindParams = ();
    type AllParams = CollectListParams;

    const NAME: &'static str = "Collect";
    const KEY: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "collects/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "collects"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "collects"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "collects/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing collects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectListParams {
    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only collects for the given product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Return only collects for the given collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(CollectListParams { limit, fields });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_collect_cannot_be_updated() {
        assert!(get_path(Collect::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert!(get_path(Collect::PATHS, ResourceOperation::Create, &[]).is_some());
    }

    #[test]
    fn test_collect_create_body() {
        let collect = Collect {
            product_id: Some(921_728_736),
            collection_id: Some(841_564_295),
            ..Default::default()
        };

        let value = serde_json::to_value(&collect).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"product_id": 921_728_736_u64, "collection_id": 841_564_295_u64})
        );
    }
}
