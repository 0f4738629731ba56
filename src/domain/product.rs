use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{CategoryName, ImageUrl, ProductId, ProductName, ProductPrice, Slug};

/// Flattened product shape consumed by listing grids.
///
/// Every field except `image_url` and `category_name` is required for the
/// card to render meaningfully; a missing image degrades to a placeholder
/// in the template rather than failing the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedProduct {
    pub id: ProductId,
    pub image_url: Option<ImageUrl>,
    pub price: ProductPrice,
    pub name: ProductName,
    pub slug: Slug,
    pub category_name: Option<CategoryName>,
}

/// Product shape consumed by the detail page.
///
/// `images` is the ordered sequence of raw image references exactly as the
/// store returned them; resolution to displayable URLs is the asset host's
/// concern. `price_id` is an opaque payment-integration identifier passed
/// through unexamined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullProduct {
    pub id: ProductId,
    pub images: Vec<Value>,
    pub price: ProductPrice,
    pub name: ProductName,
    pub description: Option<String>,
    pub slug: Slug,
    pub category_name: Option<CategoryName>,
    pub price_id: Option<String>,
}
