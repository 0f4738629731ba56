use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::SanityRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::ServiceError;
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(repo: web::Data<SanityRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_index_service(repo.get_ref()).await {
        Ok(products) => {
            let mut context = base_context("index");
            context.insert("products", &products);
            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera, &base_context("index")),
        Err(err) => {
            log::error!("Failed to render homepage: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
