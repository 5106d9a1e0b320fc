//! Resource models for the Admin REST API.
//!
//! Each resource implements [`RestResource`](crate::rest::RestResource), and
//! each list params type implements
//! [`PageParams`](crate::request::PageParams) so that its list call can be
//! drained page by page. On a cursor page Shopify only accepts `limit` and
//! `fields` next to `page_info`, so setting the cursor clears every other
//! filter.
//!
//! | Resource | List path |
//! |----------|-----------|
//! | [`Product`] | `products` |
//! | [`Variant`] | `products/{product_id}/variants` |
//! | [`InventoryItem`] | `inventory_items` |
//! | [`InventoryLevel`] | `inventory_levels` |
//! | [`Order`] | `orders` |
//! | [`Location`] | `locations` |
//! | [`ProductImage`] | `products/{product_id}/images` |
//! | [`Fulfillment`] | `orders/{order_id}/fulfillments` |
//! | [`CustomCollection`] | `custom_collections` |
//! | [`SmartCollection`] | `smart_collections` |
//! | [`Collect`] | `collects` |

/// Implements [`PageParams`](crate::request::PageParams) for a list params
/// type, keeping only the named fields next to the new `page_info` cursor.
macro_rules! impl_page_params {
    ($params:ty { $($kept:ident),* }) => {
        impl crate::request::PageParams for $params {
            fn set_page_cursor(&mut self, cursor: &str) {
                *self = Self {
                    $($kept: self.$kept.take(),)*
                    page_info: Some(cursor.to_string()),
                    ..Self::default()
                };
            }
        }
    };
}

mod collect;
mod custom_collection;
mod fulfillment;
mod inventory_item;
mod inventory_level;
mod location;
mod order;
mod product;
mod product_image;
mod smart_collection;
mod variant;

pub use collect::{Collect, CollectListParams};
pub use custom_collection::{CustomCollection, CustomCollectionListParams};
pub use fulfillment::{Fulfillment, FulfillmentListParams, FulfillmentStatus};
pub use inventory_item::{InventoryItem, InventoryItemListParams};
pub use inventory_level::{InventoryLevel, InventoryLevelListParams};
pub use location::{Location, LocationListParams};
pub use order::{LineItem, Order, OrderListParams};
pub use product::{Product, ProductFindParams, ProductListParams, ProductStatus};
pub use product_image::{ProductImage, ProductImageListParams};
pub use smart_collection::{SmartCollection, SmartCollectionListParams, SmartCollectionRule};
pub use variant::{Variant, VariantFindParams, VariantListParams};
