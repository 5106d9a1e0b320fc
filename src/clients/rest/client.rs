//! REST client implementation for the Shopify Admin API.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ApiVersion;
use crate::session::Session;

/// REST API client for the Shopify Admin API.
///
/// `RestClient` is `Send + Sync` and can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_api_helpers::{RestClient, Session};
///
/// let client = RestClient::new(&session)?;
///
/// let response = client.get("products", None).await?;
///
/// let body = serde_json::json!({"collect": {"product_id": 1, "collection_id": 2}});
/// let response = client.post("collects", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given session.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(session: &Session) -> Result<Self, RestError> {
        let http_client = HttpClient::new(session)?;

        tracing::debug!(
            "Created REST client for {} at {}",
            session.shop_url,
            http_client.base_path()
        );

        Ok(Self {
            http_client,
            api_version: session.api_version.clone(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a request with an explicit method.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level errors, including a missing body on
    /// `Post` or `Put`.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, &normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading slashes and any `.json` suffix, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(format!("{path}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopUrl};

    #[test]
    fn test_normalize_path_variants() {
        assert_eq!(normalize_path("products").unwrap(), "products.json");
        assert_eq!(normalize_path("/products").unwrap(), "products.json");
        assert_eq!(normalize_path("products.json").unwrap(), "products.json");
        assert_eq!(normalize_path("//products.json").unwrap(), "products.json");
        assert_eq!(
            normalize_path("orders/450789469/fulfillments").unwrap(),
            "orders/450789469/fulfillments.json"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for path in ["", "/", "/.json"] {
            assert!(matches!(
                normalize_path(path),
                Err(RestError::InvalidPath { path }) if path.is_empty()
            ));
        }
    }

    #[test]
    fn test_rest_client_uses_session_version() {
        let session = Session::new(
            ShopUrl::new("test-shop.myshopify.com").unwrap(),
            "2024-10".parse().unwrap(),
            AccessToken::new("token").unwrap(),
        );
        let client = RestClient::new(&session).unwrap();

        assert_eq!(client.api_version().to_string(), "2024-10");
        assert_eq!(client.http_client().base_path(), "/admin/api/2024-10");
    }
}
