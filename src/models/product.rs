//! Raw product documents as the content store returns them.
//!
//! The GROQ projections flatten `slug.current`, `category->name` and
//! `images[0].asset->url` into top-level keys, but the store is loosely
//! typed: any field may be absent or unresolved. Conversion into domain
//! view models enforces the required-field contract — `_id`, `name`,
//! `slug` and `price` must be present; everything else degrades to an
//! absent value.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::product::{FullProduct, SimplifiedProduct};
use crate::domain::types::{
    CategoryName, ImageUrl, ProductId, ProductName, ProductPrice, Slug, TypeConstraintError,
};
use crate::repository::errors::StoreError;

/// Flat listing row produced by the category and newest queries.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListingDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
}

/// Detail row produced by the by-slug query.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DetailDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Value>>,
    pub price: Option<f64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    pub price_id: Option<String>,
}

fn require<T>(field: Option<T>, name: &str) -> Result<T, StoreError> {
    field.ok_or_else(|| StoreError::MalformedDocument(format!("missing required field `{name}`")))
}

fn invalid(name: &str, e: TypeConstraintError) -> StoreError {
    StoreError::MalformedDocument(format!("invalid field `{name}`: {e}"))
}

impl TryFrom<ListingDocument> for SimplifiedProduct {
    type Error = StoreError;

    fn try_from(doc: ListingDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(require(doc.id, "_id")?).map_err(|e| invalid("_id", e))?,
            image_url: doc.image_url.and_then(|url| ImageUrl::new(url).ok()),
            price: ProductPrice::new(require(doc.price, "price")?)
                .map_err(|e| invalid("price", e))?,
            name: ProductName::new(require(doc.name, "name")?).map_err(|e| invalid("name", e))?,
            slug: Slug::new(require(doc.slug, "slug")?).map_err(|e| invalid("slug", e))?,
            category_name: doc.category_name.and_then(|name| CategoryName::new(name).ok()),
        })
    }
}

impl TryFrom<DetailDocument> for FullProduct {
    type Error = StoreError;

    fn try_from(doc: DetailDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(require(doc.id, "_id")?).map_err(|e| invalid("_id", e))?,
            images: doc.images.unwrap_or_default(),
            price: ProductPrice::new(require(doc.price, "price")?)
                .map_err(|e| invalid("price", e))?,
            name: ProductName::new(require(doc.name, "name")?).map_err(|e| invalid("name", e))?,
            description: doc.description,
            slug: Slug::new(require(doc.slug, "slug")?).map_err(|e| invalid("slug", e))?,
            category_name: doc.category_name.and_then(|name| CategoryName::new(name).ok()),
            price_id: doc.price_id,
        })
    }
}

/// Project a raw listing result into view models.
///
/// Malformed items are dropped with a warning rather than failing the
/// whole listing; both the category page and the newest rail apply this
/// policy. Input order is preserved.
pub fn project_listing(documents: Vec<Value>) -> Vec<SimplifiedProduct> {
    documents
        .into_iter()
        .filter_map(|value| {
            let projected = serde_json::from_value::<ListingDocument>(value)
                .map_err(|e| StoreError::MalformedDocument(e.to_string()))
                .and_then(SimplifiedProduct::try_from);
            match projected {
                Ok(product) => Some(product),
                Err(e) => {
                    log::warn!("Dropping listing item: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Project a raw detail result into a view model.
///
/// Unlike listings there is nothing to degrade to: a malformed detail
/// document fails the page.
pub fn project_detail(document: Value) -> Result<FullProduct, StoreError> {
    serde_json::from_value::<DetailDocument>(document)
        .map_err(|e| StoreError::MalformedDocument(e.to_string()))
        .and_then(FullProduct::try_from)
}
