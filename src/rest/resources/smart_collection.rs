//! `SmartCollection` resource.
//!
//! Smart collections select products automatically from a set of rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// One selection rule of a smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionRule {
    /// The product property the rule tests (e.g. "vendor", "tag").
    pub column: String,
    /// The comparison (e.g. "equals", "greater_than").
    pub relation: String,
    /// The value compared against.
    pub condition: String,
}

/// A collection whose products are selected by rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
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

    /// The rules products must match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SmartCollectionRule>,

    /// If `true`, a product only needs to match one rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,

    /// The order in which products are sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// When the collection was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// When the collection was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for SmartCollection {
    type Id = u64;
    type FindParams = ();
    type AllParams = SmartCollectionListParams;

    const NAME: &'static str = "SmartCollection";
    const KEY: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "smart_collections/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "smart_collections"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "smart_collections",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "smart_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "smart_collections/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing smart collections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollectionListParams {
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

impl_page_params!(SmartCollectionListParams { limit, fields });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_collection_deserializes_rules() {
        let json = r#"{
            "id": 482865238,
            "title": "Smart iPods",
            "disjunctive": false,
            "rules": [{"column": "type", "relation": "equals", "condition": "Cult Products"}]
        }"#;

        let collection: SmartCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.rules.len(), 1);
        assert_eq!(collection.rules[0].condition, "Cult Products");
        assert_eq!(collection.disjunctive, Some(false));
    }

    #[test]
    fn test_smart_collection_without_rules_defaults_to_empty() {
        let collection: SmartCollection =
            serde_json::from_str(r#"{"id": 1, "title": "All"}"#).unwrap();
        assert!(collection.rules.is_empty());
    }
}
