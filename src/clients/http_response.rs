//! HTTP response types.
//!
//! [`HttpResponse`] parses the Shopify headers the helpers care about: the
//! `Link` header for cursor pagination, the call-limit header, the request id
//! and the deprecation notice.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value, returning `None` if it is malformed.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.split_once('/')?;

        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }
}

/// Cursor pagination parsed from the `Link` header.
///
/// Shopify links to adjacent pages with URLs carrying a `page_info` query
/// parameter:
///
/// ```text
/// <https://shop/admin/api/2025-10/products.json?limit=50&page_info=abc>; rel="next"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The `page_info` value for the previous page, if available.
    pub prev_page_info: Option<String>,
    /// The `page_info` value for the next page, if available.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination info from a `Link` header value.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.trim().split(';');

            let url = parts
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));
            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|rel| rel.trim_matches('"'))
            });

            if let (Some(url), Some(rel)) = (url, rel) {
                let page_info = Self::extract_page_info(url);
                match rel {
                    "previous" => result.prev_page_info = page_info,
                    "next" => result.next_page_info = page_info,
                    _ => {}
                }
            }
        }

        result
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;

        query.split('&').find_map(|param| {
            param
                .split_once('=')
                .filter(|(key, _)| *key == "page_info")
                .map(|(_, value)| value.to_string())
        })
    }
}

/// An HTTP response from the Shopify API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased; a header may have several values.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Page info for the previous page (from the `Link` header).
    pub prev_page_info: Option<String>,
    /// Page info for the next page (from the `Link` header).
    pub next_page_info: Option<String>,
    /// Rate limit information (from `X-Shopify-Shop-Api-Call-Limit`).
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Link` and call-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = headers
            .get("link")
            .and_then(|values| values.first())
            .map(|link| PaginationInfo::parse_link_header(link))
            .unwrap_or_default();

        let api_call_limit = headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value));

        Self {
            code,
            headers,
            body,
            prev_page_info: pagination.prev_page_info,
            next_page_info: pagination.next_page_info,
            api_call_limit,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(name: &str, value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
        for code in [301, 400, 404, 422, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_api_call_limit_parsing() {
        let limit = ApiCallLimit::parse("1/40").unwrap();
        assert_eq!(limit.request_count, 1);
        assert_eq!(limit.bucket_size, 40);

        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
    }

    #[test]
    fn test_link_header_with_next_and_previous() {
        let link = r#"<https://shop.myshopify.com/admin/api/2025-10/products.json?limit=50&page_info=abc123>; rel="next", <https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=xyz789>; rel="previous""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.next_page_info.as_deref(), Some("abc123"));
        assert_eq!(info.prev_page_info.as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_link_header_with_only_previous() {
        let link = r#"<https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=xyz789>; rel="previous""#;
        let info = PaginationInfo::parse_link_header(link);
        assert!(info.next_page_info.is_none());
        assert_eq!(info.prev_page_info.as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_response_parses_link_header() {
        let response = HttpResponse::new(
            200,
            headers(
                "link",
                r#"<https://shop.myshopify.com/admin/api/2025-10/orders.json?page_info=next1>; rel="next""#,
            ),
            json!({"orders": []}),
        );
        assert_eq!(response.next_page_info.as_deref(), Some("next1"));
        assert!(response.prev_page_info.is_none());
    }

    #[test]
    fn test_request_id_and_deprecation_reason() {
        let response = HttpResponse::new(200, headers("x-request-id", "abc-123"), json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
        assert!(response.deprecation_reason().is_none());

        let response = HttpResponse::new(
            200,
            headers("x-shopify-api-deprecated-reason", "Removed in 2026-01"),
            json!({}),
        );
        assert_eq!(response.deprecation_reason(), Some("Removed in 2026-01"));
    }
}
