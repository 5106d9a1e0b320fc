//! `CustomCollection` resource.
//!
//! A custom collection holds a hand-picked set of products. Membership is
//! managed through [`Collect`](super::Collect) records, not on the collection
//! itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A collection whose products are chosen manually.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    /// The unique identifier of the collection.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The URL-friendly handle.
    #[serde(skip_serializing)]
    pub handle: Option<String>,

    /// The name of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The order in which products are sorted (e.g. "manual", "best-selling").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// Where the collection is published ("web" or "global").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// When the collection was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// When the collection was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for CustomCollection {
    type Id = u64;
    type FindParams = ();
    type AllParams = CustomCollectionListParams;

    const NAME: &'static str = "CustomCollection";
    const KEY: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "custom_collections/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "custom_collections"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "custom_collections",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "custom_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "custom_collections/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing custom collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollectionListParams {
    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only collections containing the given product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Filter by title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(CustomCollectionListParams { limit, fields });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_collection_save_body_skips_read_only_fields() {
        let collection = CustomCollection {
            id: Some(841_564_295),
            handle: Some("ipods".to_string()),
            title: Some("IPods".to_string()),
            sort_order: Some("manual".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["title"], "IPods");
        assert!(value.get("id").is_none());
        assert!(value.get("handle").is_none());
    }
}
