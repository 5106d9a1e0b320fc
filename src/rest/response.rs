//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] carries the deserialized data together with the
//! pagination cursor, the call limit and the request id of the response it
//! came from. It derefs to `T`, so a `ResourceResponse<Vec<Product>>` can be
//! iterated and indexed directly.
//!
//! A list response implements [`Page`], which is what lets
//! [`make_paginated_request`](crate::request::make_paginated_request) follow
//! its `page_info` cursor.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::request::Page;
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::clients::{ApiCallLimit, PaginationInfo};
/// use shopify_api_helpers::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     PaginationInfo {
///         prev_page_info: None,
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///     },
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert_eq!(response.next_page_info(), Some("eyJsYXN0X2lkIjo0fQ"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: PaginationInfo,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns `true` if the `Link` header pointed at a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next_page_info.is_some()
    }

    /// Returns the `page_info` cursor for the next page, if any.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination.next_page_info.as_deref()
    }

    /// Returns the `page_info` cursor for the previous page, if any.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination.prev_page_info.as_deref()
    }

    /// Returns the rate limit information, if the header was present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Builds a `ResourceResponse` from the value under `key` in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the key is missing or its
    /// value does not deserialize into `T`.
    pub fn from_http_response(
        response: HttpResponse,
        key: &str,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let data_value = response
            .body
            .get(key)
            .ok_or_else(|| ResourceError::Serialization {
                resource,
                message: format!("missing key '{key}' in response body"),
            })?;

        let data: T = serde_json::from_value(data_value.clone()).map_err(|e| {
            ResourceError::Serialization {
                resource,
                message: format!("failed to deserialize '{key}': {e}"),
            }
        })?;

        Ok(Self {
            data,
            pagination: PaginationInfo {
                prev_page_info: response.prev_page_info,
                next_page_info: response.next_page_info,
            },
            rate_limit: response.api_call_limit,
            request_id,
        })
    }
}

impl<T> Page for ResourceResponse<Vec<T>> {
    type Item = T;

    fn has_next_page(&self) -> bool {
        Self::has_next_page(self)
    }

    fn next_page_cursor(&self) -> Option<&str> {
        self.next_page_info()
    }

    fn into_items(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Deserialize, PartialEq)]
    struct TestLocation {
        id: u64,
        name: String,
    }

    fn next_page(cursor: &str) -> PaginationInfo {
        PaginationInfo {
            prev_page_info: None,
            next_page_info: Some(cursor.to_string()),
        }
    }

    #[test]
    fn test_deref_gives_access_to_inner_data() {
        let mut response =
            ResourceResponse::new(vec!["a", "b"], PaginationInfo::default(), None, None);

        assert_eq!(response.len(), 2);
        assert_eq!(response.first(), Some(&"a"));

        response.push("c");
        assert_eq!(response.into_inner(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_next_page_info() {
        let response = ResourceResponse::new("data", next_page("token"), None, None);
        assert!(response.has_next_page());
        assert_eq!(response.next_page_info(), Some("token"));
        assert!(response.prev_page_info().is_none());

        let response = ResourceResponse::new("data", PaginationInfo::default(), None, None);
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_page_impl_exposes_cursor_and_items() {
        let response = ResourceResponse::new(vec![1, 2, 3], next_page("abc"), None, None);

        assert!(Page::has_next_page(&response));
        assert_eq!(Page::next_page_cursor(&response), Some("abc"));
        assert_eq!(Page::into_items(response), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_http_response_reads_key_and_headers() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-456".to_string()]);
        headers.insert(
            "x-shopify-shop-api-call-limit".to_string(),
            vec!["5/40".to_string()],
        );
        headers.insert(
            "link".to_string(),
            vec![r#"<https://shop.myshopify.com/admin/api/2025-10/locations.json?page_info=next123>; rel="next""#.to_string()],
        );

        let http_response = HttpResponse::new(
            200,
            headers,
            json!({"locations": [{"id": 1, "name": "Warehouse"}, {"id": 2, "name": "Store"}]}),
        );

        let response: ResourceResponse<Vec<TestLocation>> =
            ResourceResponse::from_http_response(http_response, "locations", "Location").unwrap();

        assert_eq!(response.len(), 2);
        assert_eq!(response[1].name, "Store");
        assert_eq!(response.next_page_info(), Some("next123"));
        assert_eq!(response.request_id(), Some("req-456"));
        assert_eq!(response.rate_limit().map(|l| l.request_count), Some(5));
    }

    #[test]
    fn test_from_http_response_missing_key() {
        let http_response = HttpResponse::new(200, HashMap::new(), json!({"other": []}));

        let result: Result<ResourceResponse<Vec<TestLocation>>, _> =
            ResourceResponse::from_http_response(http_response, "locations", "Location");

        assert!(matches!(
            result,
            Err(ResourceError::Serialization { resource: "Location", .. })
        ));
    }
}
