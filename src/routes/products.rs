use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::SanityRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    show_category as show_category_service, show_product as show_product_service,
};

#[get("/product/{slug}")]
pub async fn show_product(
    slug: web::Path<String>,
    repo: web::Data<SanityRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_product_service(&slug, repo.get_ref()).await {
        Ok(product) => {
            let mut context = base_context("product");
            context.insert("product", &product);
            render_template(&tera, "products/detail.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera, &base_context("product")),
        Err(err) => {
            log::error!("Failed to render product detail: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

// Registered after all fixed routes so that `/product/...` and static
// paths win over the catch-all category segment.
#[get("/{category}")]
pub async fn show_category(
    category: web::Path<String>,
    repo: web::Data<SanityRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let category = category.into_inner();
    match show_category_service(&category, repo.get_ref()).await {
        Ok(products) => {
            let mut context = base_context("category");
            context.insert("category", &category);
            context.insert("products", &products);
            render_template(&tera, "products/index.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera, &base_context("category")),
        Err(err) => {
            log::error!("Failed to render category listing: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
