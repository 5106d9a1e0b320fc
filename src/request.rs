//! Single-call and cursor-draining request helpers.
//!
//! Every resource helper in this crate goes through one of two entry points:
//!
//! - [`make_request`]: call the remote accessor once and hand back its result
//! - [`make_paginated_request`]: call it, then keep calling it with the
//!   previous page's cursor until the last page, collecting every item
//!
//! Both are generic over the accessor. Anything that takes a params value and
//! returns a [`Page`] can be drained, whether it is
//! [`RestResource::all`](crate::rest::RestResource::all) or a closure in a
//! test.
//!
//! Pages are fetched strictly one after another, since each cursor comes from
//! the previous response. Draining gives up with
//! [`Error::TooManyPageRequests`] after [`MAX_PAGE_REQUESTS`] calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_api_helpers::request::make_paginated_request;
//! use shopify_api_helpers::rest::resources::{Order, OrderListParams};
//! use shopify_api_helpers::rest::RestResource;
//!
//! let params = OrderListParams { limit: Some(250), ..Default::default() };
//! let orders = make_paginated_request(|p| Order::all(&client, Some(p)), params).await?;
//! ```

use std::future::Future;

use crate::error::Error;

/// Maximum number of calls [`make_paginated_request`] makes before giving up.
pub const MAX_PAGE_REQUESTS: usize = 1000;

/// One page of results from a list call.
pub trait Page {
    /// The item type carried by the page.
    type Item;

    /// Returns `true` if the remote reports more pages after this one.
    fn has_next_page(&self) -> bool;

    /// Returns the cursor for the next page, if any.
    fn next_page_cursor(&self) -> Option<&str>;

    /// Consumes the page, yielding its items in order.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Parameters that can carry a "continue from" cursor.
pub trait PageParams {
    /// Points these parameters at the page identified by `cursor`.
    fn set_page_cursor(&mut self, cursor: &str);
}

/// Invokes `call` exactly once with `params` and returns its result.
///
/// The result is passed through untouched; a page that reports further pages
/// is not followed.
///
/// # Errors
///
/// Returns whatever `call` fails with, converted into [`Error`].
pub async fn make_request<P, F, Fut, T, E>(call: F, params: P) -> Result<T, Error>
where
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<Error>,
{
    call(params).await.map_err(Into::into)
}

/// Drains every page of a list call and returns all items in page order.
///
/// The first call receives `params` as given. Each following call receives a
/// fresh clone of `params` with the previous page's cursor set through
/// [`PageParams::set_page_cursor`]. Items are neither reordered nor
/// deduplicated.
///
/// Draining stops when a page reports no next page. A page that reports a
/// next page but carries no cursor also ends the drain, since there is
/// nothing to follow.
///
/// # Errors
///
/// - [`Error::TooManyPageRequests`] if the [`MAX_PAGE_REQUESTS`]th page still
///   reports a next page
/// - whatever `call` fails with, converted into [`Error`]; items collected
///   before the failure are discarded
pub async fn make_paginated_request<P, F, Fut, R, E>(
    mut call: F,
    params: P,
) -> Result<Vec<R::Item>, Error>
where
    P: Clone + PageParams,
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: Page,
    E: Into<Error>,
{
    let mut page = make_request(&mut call, params.clone()).await?;
    let mut requests = 1;
    let mut items = Vec::new();

    loop {
        let next_cursor = if page.has_next_page() {
            let cursor = page.next_page_cursor().map(ToString::to_string);
            if cursor.is_none() {
                tracing::warn!("Page reported more results without a cursor, stopping");
            }
            cursor
        } else {
            None
        };

        items.extend(page.into_items());

        let Some(cursor) = next_cursor else {
            tracing::debug!(
                "Drained {} items in {} request(s)",
                items.len(),
                requests
            );
            return Ok(items);
        };

        if requests >= MAX_PAGE_REQUESTS {
            tracing::warn!(
                "Pagination did not finish after {} requests, giving up",
                MAX_PAGE_REQUESTS
            );
            return Err(Error::TooManyPageRequests {
                max_pages: MAX_PAGE_REQUESTS,
            });
        }

        let mut next_params = params.clone();
        next_params.set_page_cursor(&cursor);

        tracing::debug!("Fetching page {} (page_info={})", requests + 1, cursor);
        page = make_request(&mut call, next_params).await?;
        requests += 1;
    }
}
