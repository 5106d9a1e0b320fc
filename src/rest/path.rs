//! Path selection for REST resources.
//!
//! A resource can be reachable through several URL templates. A `Variant`,
//! for example, is listed under its product but fetched on its own:
//!
//! - `products/{product_id}/variants` (list, nested)
//! - `variants/{id}` (find, standalone)
//!
//! [`get_path`] picks the most specific template whose IDs are all known, and
//! [`build_path`] fills the placeholders in.
//!
//! # Example
//!
//! ```rust
//! use shopify_api_helpers::clients::HttpMethod;
//! use shopify_api_helpers::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["product_id"], "products/{product_id}/variants"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "variants/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["product_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", "632910392");
//! assert_eq!(build_path(path.template, &ids), "products/632910392/variants");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// Operations a REST resource can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by ID.
    Find,
    /// List resources, one page at a time.
    All,
    /// Create a new resource.
    Create,
    /// Update an existing resource.
    Update,
    /// Delete a resource.
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL template for one operation on a resource.
///
/// Templates use `{name}` placeholders, e.g. `products/{product_id}/images`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method sent for this path.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// IDs the template needs, in order.
    pub ids: &'static [&'static str],
    /// The URL template.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns `true` if every ID this path needs is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for `operation` given the known IDs.
///
/// Among paths for the operation whose IDs are all available, the one
/// needing the most IDs wins. Returns `None` if no path qualifies.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation && p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Fills `{name}` placeholders in `template` from `ids`.
///
/// Placeholders without a value are left as they are.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
