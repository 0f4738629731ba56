use crate::domain::product::{FullProduct, SimplifiedProduct};
use crate::domain::types::{CategoryName, Slug};
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering a category listing page.
///
/// Validates the route parameter into a [`CategoryName`] and fetches all
/// products of that category. An empty result is a normal outcome and
/// renders an empty grid. Store errors are translated into `ServiceError`
/// variants so that the HTTP route can remain a thin wrapper.
pub async fn show_category<R>(category: &str, repo: &R) -> ServiceResult<Vec<SimplifiedProduct>>
where
    R: ProductReader,
{
    let category = match CategoryName::new(category) {
        Ok(category) => category,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.list_by_category(&category).await {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products for category '{category}': {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for rendering a product detail page.
///
/// A slug with no matching document maps to `ServiceError::NotFound`,
/// which the route surfaces as a not-found page rather than an error.
pub async fn show_product<R>(slug: &str, repo: &R) -> ServiceResult<FullProduct>
where
    R: ProductReader,
{
    let slug = match Slug::new(slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_by_slug(&slug).await {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product by slug '{slug}': {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProductId, ProductName, ProductPrice};
    use crate::repository::test::TestRepository;

    fn sample_card(slug: &str, category: &str) -> SimplifiedProduct {
        SimplifiedProduct {
            id: ProductId::new(format!("id-{slug}")).unwrap(),
            image_url: None,
            price: ProductPrice::new(25.0).unwrap(),
            name: ProductName::new(slug.replace('-', " ")).unwrap(),
            slug: Slug::new(slug).unwrap(),
            category_name: Some(CategoryName::new(category).unwrap()),
        }
    }

    fn sample_detail(slug: &str) -> FullProduct {
        FullProduct {
            id: ProductId::new(format!("id-{slug}")).unwrap(),
            images: vec![],
            price: ProductPrice::new(25.0).unwrap(),
            name: ProductName::new(slug.replace('-', " ")).unwrap(),
            description: Some("A fine product.".into()),
            slug: Slug::new(slug).unwrap(),
            category_name: Some(CategoryName::new("men").unwrap()),
            price_id: Some("price_1N".into()),
        }
    }

    #[actix_web::test]
    async fn lists_only_the_requested_category_in_input_order() {
        let repo = TestRepository::new(
            vec![
                sample_card("blue-shirt", "men"),
                sample_card("summer-dress", "women"),
                sample_card("red-cap", "men"),
            ],
            vec![],
        );

        let products = show_category("men", &repo).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].slug.as_str(), "blue-shirt");
        assert_eq!(products[1].slug.as_str(), "red-cap");
    }

    #[actix_web::test]
    async fn unknown_category_renders_an_empty_grid() {
        let repo = TestRepository::new(vec![sample_card("blue-shirt", "men")], vec![]);

        let products = show_category("teens", &repo).await.unwrap();

        assert!(products.is_empty());
    }

    #[actix_web::test]
    async fn blank_category_is_not_found() {
        let repo = TestRepository::default();

        assert_eq!(show_category("  ", &repo).await, Err(ServiceError::NotFound));
    }

    #[actix_web::test]
    async fn returns_product_for_known_slug() {
        let repo = TestRepository::new(vec![], vec![sample_detail("blue-shirt")]);

        let product = show_product("blue-shirt", &repo).await.unwrap();

        assert_eq!(product.slug.as_str(), "blue-shirt");
        assert_eq!(product.price_id.as_deref(), Some("price_1N"));
    }

    #[actix_web::test]
    async fn missing_slug_is_not_found_not_an_error() {
        let repo = TestRepository::new(vec![], vec![sample_detail("blue-shirt")]);

        assert_eq!(
            show_product("nonexistent-item", &repo).await,
            Err(ServiceError::NotFound)
        );
    }

    #[actix_web::test]
    async fn store_failure_is_internal() {
        let repo = TestRepository::unavailable();

        assert_eq!(
            show_product("blue-shirt", &repo).await,
            Err(ServiceError::Internal)
        );
    }
}
