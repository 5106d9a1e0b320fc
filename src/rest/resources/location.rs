//! Location resource.
//!
//! Locations are read-only through the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A place where a merchant stocks, sells or ships inventory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    /// The unique identifier of the location.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The name of the location.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// The first line of the address.
    #[serde(skip_serializing)]
    pub address1: Option<String>,

    /// The city.
    #[serde(skip_serializing)]
    pub city: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing)]
    pub country_code: Option<String>,

    /// The ZIP or postal code.
    #[serde(skip_serializing)]
    pub zip: Option<String>,

    /// Whether the location is active.
    #[serde(skip_serializing)]
    pub active: Option<bool>,

    /// When the location was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the location was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Location {
    type Id = u64;
    type FindParams = ();
    type AllParams = LocationListParams;

    const NAME: &'static str = "Location";
    const KEY: &'static str = "location";
    const PLURAL: &'static str = "locations";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "locations/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "locations"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocationListParams {
    /// Maximum number of results per page (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(LocationListParams { limit });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PageParams;
    use crate::rest::get_path;

    #[test]
    fn test_location_is_read_only() {
        for operation in [
            ResourceOperation::Create,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert!(get_path(Location::PATHS, operation, &["id"]).is_none());
        }
    }

    #[test]
    fn test_location_serializes_to_empty_object() {
        let location = Location {
            id: Some(655_441_491),
            name: Some("Warehouse".to_string()),
            active: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_location_cursor_keeps_limit() {
        let mut params = LocationListParams {
            limit: Some(250),
            page_info: None,
        };
        params.set_page_cursor("c2");

        assert_eq!(params.limit, Some(250));
        assert_eq!(params.page_info.as_deref(), Some("c2"));
    }
}
