use crate::domain::product::SimplifiedProduct;
use crate::groq::DEFAULT_NEWEST_LIMIT;
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the homepage "newest" rail.
///
/// Fetches the newest products capped at [`DEFAULT_NEWEST_LIMIT`]. An
/// empty catalog is a normal outcome and renders an empty rail. Store
/// errors are translated into `ServiceError` so that the HTTP route can
/// remain a thin wrapper.
pub async fn show_index<R>(repo: &R) -> ServiceResult<Vec<SimplifiedProduct>>
where
    R: ProductReader,
{
    match repo.list_newest(DEFAULT_NEWEST_LIMIT).await {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list newest products: {e}");
            Err(ServiceError::Internal)
        }
    }
}
