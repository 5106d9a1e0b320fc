//! REST resource trait.
//!
//! Implementing [`RestResource`] gives a type `find()`, `all()`,
//! `all_with_parent()`, `save()` and `delete()` against the URL templates it
//! declares in [`RestResource::PATHS`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_api_helpers::clients::HttpMethod;
//! use shopify_api_helpers::rest::{ResourceOperation, ResourcePath, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Location {
//!     pub id: Option<u64>,
//!     pub name: Option<String>,
//! }
//!
//! impl RestResource for Location {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = ();
//!
//!     const NAME: &'static str = "Location";
//!     const KEY: &'static str = "location";
//!     const PLURAL: &'static str = "locations";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "locations"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let locations = Location::all(&client, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A REST resource that can be fetched, listed, saved and deleted.
///
/// Operations a resource does not declare a path for fail with
/// [`ResourceError::PathResolutionFailed`].
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters for `find()`. Use `()` if none.
    type FindParams: Serialize + Default + Send + Sync;

    /// Query parameters for `all()`: filters and the `page_info` cursor.
    type AllParams: Serialize + Default + Send + Sync;

    /// The singular name used in error messages (e.g., "Product").
    const NAME: &'static str;

    /// The response body key for a single resource (e.g., `inventory_item`).
    const KEY: &'static str;

    /// The response body key for a list (e.g., `inventory_items`).
    const PLURAL: &'static str;

    /// URL templates for the operations this resource supports.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID, or `None` if it has not been saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        fetch::<Self>(client, HashMap::new(), id, params).await
    }

    /// Fetches a single resource nested under a parent by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the parent or the resource
    /// doesn't exist, or [`ResourceError::PathResolutionFailed`] if no find
    /// path uses `parent_id_name`.
    async fn find_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let mut ids = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        fetch::<Self>(client, ids, id, params).await
    }

    /// Fetches one page of resources.
    ///
    /// Use [`ResourceResponse::next_page_info`] to continue, or hand this
    /// method to [`make_paginated_request`](crate::request::make_paginated_request)
    /// to drain every page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can
    /// only be listed under a parent.
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        list::<Self>(client, &HashMap::new(), params).await
    }

    /// Fetches one page of resources nested under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no list path uses
    /// `parent_id_name`.
    async fn all_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let mut ids = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        list::<Self>(client, &ids, params).await
    }

    /// Creates the resource if it has no ID, otherwise updates it.
    ///
    /// Returns the resource as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// body, or [`ResourceError::NotFound`] when updating a missing resource.
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let mut body = serde_json::Map::new();
        body.insert(
            Self::KEY.to_string(),
            serde_json::to_value(self).map_err(|e| ResourceError::Serialization {
                resource: Self::NAME,
                message: e.to_string(),
            })?,
        );

        let mut ids = HashMap::new();
        let (operation, id) = match self.get_id() {
            Some(id) => {
                let id = id.to_string();
                ids.insert("id", id.clone());
                (ResourceOperation::Update, Some(id))
            }
            None => (ResourceOperation::Create, None),
        };

        let response = send::<Self>(
            client,
            operation,
            &ids,
            Some(Value::Object(body)),
            None,
            id.as_deref(),
        )
        .await?;

        let saved: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY, Self::NAME)?;
        Ok(saved.into_inner())
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// ID, or [`ResourceError::NotFound`] if it no longer exists.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Delete.as_str(),
            })?
            .to_string();

        let mut ids = HashMap::new();
        ids.insert("id", id.clone());

        send::<Self>(client, ResourceOperation::Delete, &ids, None, None, Some(&id)).await?;
        Ok(())
    }
}

async fn fetch<R: RestResource>(
    client: &RestClient,
    mut ids: HashMap<&str, String>,
    id: R::Id,
    params: Option<R::FindParams>,
) -> Result<ResourceResponse<R>, ResourceError> {
    let id = id.to_string();
    ids.insert("id", id.clone());

    let query = params
        .map(|p| serialize_to_query::<R, _>(&p))
        .transpose()?
        .filter(|q| !q.is_empty());
    let response = send::<R>(client, ResourceOperation::Find, &ids, None, query, Some(&id)).await?;

    ResourceResponse::from_http_response(response, R::KEY, R::NAME)
}

async fn list<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, String>,
    params: Option<R::AllParams>,
) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
    let query = params
        .map(|p| serialize_to_query::<R, _>(&p))
        .transpose()?
        .filter(|q| !q.is_empty());

    let response = send::<R>(client, ResourceOperation::All, ids, None, query, None).await?;
    ResourceResponse::from_http_response(response, R::PLURAL, R::NAME)
}

/// Resolves the path for `operation` and sends the request with its method.
async fn send<R: RestResource>(
    client: &RestClient,
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
    body: Option<Value>,
    query: Option<HashMap<String, String>>,
    id: Option<&str>,
) -> Result<HttpResponse, ResourceError> {
    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = resolve_path::<R>(operation, &available_ids)?;
    let url = build_path(path.template, ids);

    client
        .request(path.http_method, &url, body, query)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, id))
}

fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Result<&'static ResourcePath, ResourceError> {
    get_path(R::PATHS, operation, available_ids).ok_or(ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    })
}

/// Flattens a params struct into query parameters.
///
/// `null` values are skipped and arrays are joined with commas.
fn serialize_to_query<R: RestResource, T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::Serialization {
        resource: R::NAME,
        message: e.to_string(),
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
