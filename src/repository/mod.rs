use async_trait::async_trait;

use crate::domain::product::{FullProduct, SimplifiedProduct};
use crate::domain::types::{CategoryName, Slug};
use crate::repository::errors::StoreResult;

pub mod errors;
pub mod sanity;

pub use sanity::{SanityClient, SanityRepository};

/// Read-only operations against the product catalog.
///
/// Every call performs a fresh query; implementations must not cache
/// results between calls. Zero matches are a normal outcome: listings
/// come back empty and the by-slug lookup yields `None`.
#[async_trait]
pub trait ProductReader {
    /// List products whose resolved category name equals `category`
    /// (exact, case-sensitive match).
    async fn list_by_category(&self, category: &CategoryName)
    -> StoreResult<Vec<SimplifiedProduct>>;

    /// List the `limit` most recently created products, newest first.
    async fn list_newest(&self, limit: usize) -> StoreResult<Vec<SimplifiedProduct>>;

    /// Look up a single product by its slug.
    async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Option<FullProduct>>;
}
