//! Product image resource.
//!
//! Images only exist under a product, so every path needs `product_id`:
//!
//! ```rust,ignore
//! let images = ProductImage::all_with_parent(&client, "product_id", 632910392, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// The unique identifier of the image.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The ID of the product the image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The position of the image in the product's image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// The image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing)]
    pub width: Option<i32>,

    /// Height in pixels.
    #[serde(skip_serializing)]
    pub height: Option<i32>,

    /// IDs of the variants that use this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,

    /// When the image was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the image was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for ProductImage {
    type Id = u64;
    type FindParams = ();
    type AllParams = ProductImageListParams;

    const NAME: &'static str = "Image";
    const KEY: &'static str = "image";
    const PLURAL: &'static str = "images";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/images/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/images",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/images/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Parameters for listing a product's images.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImageListParams {
    /// Return only images after the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl_page_params!(ProductImageListParams { fields });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_images_are_only_listed_under_a_product() {
        assert!(get_path(ProductImage::PATHS, ResourceOperation::All, &[]).is_none());

        let path = get_path(ProductImage::PATHS, ResourceOperation::All, &["product_id"]).unwrap();
        assert_eq!(path.template, "products/{product_id}/images");
    }

    #[test]
    fn test_product_image_deserialization() {
        let json = r#"{
            "id": 850703190,
            "product_id": 632910392,
            "position": 1,
            "src": "https://cdn.shopify.com/s/files/1/0005/4838/0009/products/ipod-nano.png",
            "width": 123,
            "height": 456,
            "variant_ids": [808950810]
        }"#;

        let image: ProductImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.product_id, Some(632_910_392));
        assert_eq!(image.variant_ids, Some(vec![808_950_810]));
    }
}
